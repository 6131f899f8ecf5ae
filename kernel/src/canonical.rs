//! Canonical Primitives (§4.3): normalize a freshly produced primitive and
//! compute its canonical identity.

use crate::error::GeometryError;
use crate::geometry::{Circle, Line, Point, Primitive, PrimitiveKind};
use crate::hash::{canonical_hash, ContentHash, DOMAIN_CIRCLE, DOMAIN_LINE, DOMAIN_POINT};
use crate::tolerance::EPSILON_CANON;

/// Normalize a freshly produced primitive into canonical form (§4.3).
///
/// - *Point*: validated finite; coordinates are otherwise left as-is (the
///   quantization that makes two close points identical happens in
///   [`identity`], not here — canonicalized points retain full precision
///   for use in subsequent kernel operations).
/// - *Line*: divided by `√(a² + b²)`; sign-fixed so the first nonzero of
///   `(a, b)` is positive.
/// - *Circle*: validated `r > ε_canon`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidInput`] for non-finite coordinates, an
/// unnormalizable line (`a = b = 0`), or a circle with `r <= ε_canon`.
pub fn canonicalize(primitive: &Primitive) -> Result<Primitive, GeometryError> {
    match primitive {
        Primitive::Point(p) => Ok(Primitive::Point(normalize_point(p)?)),
        Primitive::Line(l) => Ok(Primitive::Line(normalize_line(l)?)),
        Primitive::Circle(c) => Ok(Primitive::Circle(normalize_circle(c)?)),
    }
}

fn normalize_point(p: &Point) -> Result<Point, GeometryError> {
    if !p.is_finite() {
        return Err(GeometryError::InvalidInput {
            detail: "point coordinates must be finite".into(),
        });
    }
    Ok(*p)
}

fn normalize_line(l: &Line) -> Result<Line, GeometryError> {
    if !l.is_finite() {
        return Err(GeometryError::InvalidInput {
            detail: "line coefficients must be finite".into(),
        });
    }
    let norm = (l.a * l.a + l.b * l.b).sqrt();
    if norm <= EPSILON_CANON {
        return Err(GeometryError::InvalidInput {
            detail: "line coefficients (a, b) cannot both be ~0".into(),
        });
    }
    let (mut a, mut b, mut c) = (l.a / norm, l.b / norm, l.c / norm);
    let negate = a < 0.0 || (a == 0.0 && b < 0.0);
    if negate {
        a = -a;
        b = -b;
        c = -c;
    }
    Ok(Line::new(a, b, c))
}

fn normalize_circle(c: &Circle) -> Result<Circle, GeometryError> {
    if !c.is_finite() {
        return Err(GeometryError::InvalidInput {
            detail: "circle center/radius must be finite".into(),
        });
    }
    if c.r <= EPSILON_CANON {
        return Err(GeometryError::InvalidInput {
            detail: format!("circle radius {} must exceed epsilon_canon", c.r),
        });
    }
    Ok(*c)
}

/// Round `v / ε_canon` to the nearest integer (§3's quantization rule).
fn quantize(v: f64) -> i64 {
    (v / EPSILON_CANON).round() as i64
}

/// Compute the canonical identity of an already-canonicalized primitive
/// (i.e. one that has passed through [`canonicalize`]).
///
/// Two primitives that canonicalize within `ε_canon` of each other produce
/// identical identities (§4.3's invariant), because both are quantized to
/// the same integer grid before hashing.
#[must_use]
pub fn identity(primitive: &Primitive) -> ContentHash {
    match primitive {
        Primitive::Point(p) => {
            let mut bytes = Vec::with_capacity(16);
            bytes.extend_from_slice(&quantize(p.x).to_le_bytes());
            bytes.extend_from_slice(&quantize(p.y).to_le_bytes());
            canonical_hash(DOMAIN_POINT, &bytes)
        }
        Primitive::Line(l) => {
            let mut bytes = Vec::with_capacity(24);
            bytes.extend_from_slice(&quantize(l.a).to_le_bytes());
            bytes.extend_from_slice(&quantize(l.b).to_le_bytes());
            bytes.extend_from_slice(&quantize(l.c).to_le_bytes());
            canonical_hash(DOMAIN_LINE, &bytes)
        }
        Primitive::Circle(c) => {
            let mut bytes = Vec::with_capacity(24);
            bytes.extend_from_slice(&quantize(c.cx).to_le_bytes());
            bytes.extend_from_slice(&quantize(c.cy).to_le_bytes());
            bytes.extend_from_slice(&quantize(c.r).to_le_bytes());
            canonical_hash(DOMAIN_CIRCLE, &bytes)
        }
    }
}

/// True iff `produced` and `target` canonicalize to the same identity and
/// agree on tag (§4.3 "Target match"). Both inputs are canonicalized by
/// this function; callers do not need to pre-canonicalize.
///
/// # Errors
///
/// Propagates [`GeometryError`] if either input fails to canonicalize.
pub fn matches_target(
    produced: &Primitive,
    target: &Primitive,
) -> Result<bool, GeometryError> {
    if produced.kind() != target.kind() {
        return Ok(false);
    }
    let a = canonicalize(produced)?;
    let b = canonicalize(target)?;
    Ok(identity(&a) == identity(&b))
}

/// Two canonical identities share a primitive (used by the search engine's
/// dedup and by `DegenerateInput` detection on `knowns`).
#[must_use]
pub fn same_identity(a: &Primitive, b: &Primitive) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match (canonicalize(a), canonicalize(b)) {
        (Ok(ca), Ok(cb)) => identity(&ca) == identity(&cb),
        _ => false,
    }
}

#[must_use]
pub const fn kind_of(primitive: &Primitive) -> PrimitiveKind {
    primitive.kind()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_is_idempotent() {
        let line = Primitive::Line(Line::new(3.0, 4.0, -5.0));
        let once = canonicalize(&line).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(identity(&once), identity(&twice));
    }

    #[test]
    fn line_normalization_fixes_sign_and_scale() {
        let a = Primitive::Line(Line::new(3.0, 4.0, -5.0));
        let b = Primitive::Line(Line::new(-6.0, -8.0, 10.0));
        assert!(same_identity(&a, &b));
    }

    #[test]
    fn point_identity_tolerates_subepsilon_noise() {
        let a = Primitive::Point(Point::new(1.0, 2.0));
        let b = Primitive::Point(Point::new(1.0 + 1e-12, 2.0 - 1e-12));
        assert!(same_identity(&a, &b));
    }

    #[test]
    fn point_identity_distinguishes_far_points() {
        let a = Primitive::Point(Point::new(1.0, 2.0));
        let b = Primitive::Point(Point::new(1.0 + 1e-6, 2.0));
        assert!(!same_identity(&a, &b));
    }

    #[test]
    fn circle_with_tiny_radius_is_invalid_input() {
        let c = Primitive::Circle(Circle::new(0.0, 0.0, 1e-15));
        assert!(matches!(
            canonicalize(&c),
            Err(GeometryError::InvalidInput { .. })
        ));
    }

    #[test]
    fn degenerate_line_coefficients_rejected() {
        let l = Primitive::Line(Line::new(0.0, 0.0, 5.0));
        assert!(matches!(
            canonicalize(&l),
            Err(GeometryError::InvalidInput { .. })
        ));
    }

    #[test]
    fn matches_target_requires_same_kind() {
        let p = Primitive::Point(Point::new(0.0, 0.0));
        let c = Primitive::Circle(Circle::new(0.0, 0.0, 1.0));
        assert!(!matches_target(&p, &c).unwrap());
    }
}
