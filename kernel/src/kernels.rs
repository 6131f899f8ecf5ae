//! Geometric Kernels (§4.2): constructive operations over numeric
//! coordinates. Inputs are assumed already validated distinct by the
//! caller (the search engine only ever calls these with primitives that
//! have already passed through [`crate::canonical::canonicalize`]).

use crate::canonical::same_identity;
use crate::error::GeometryError;
use crate::geometry::{Circle, Line, Point, Primitive};
use crate::tolerance::EPSILON_NUMERIC;

/// `line_through(P, Q)` → the line through two points.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] if `P` and `Q` share a
/// canonical identity.
pub fn line_through(p: &Point, q: &Point) -> Result<Line, GeometryError> {
    if same_identity(&Primitive::from(*p), &Primitive::from(*q)) {
        return Err(GeometryError::DegenerateInput {
            detail: "line_through requires two distinct points".into(),
        });
    }
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let a = dy;
    let b = -dx;
    let c = -(a * p.x + b * p.y);
    Ok(Line::new(a, b, c))
}

/// `circle_centered(C, P)` → the circle centered at `C` passing through `P`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] if `C == P`.
pub fn circle_centered(center: &Point, through: &Point) -> Result<Circle, GeometryError> {
    if same_identity(&Primitive::from(*center), &Primitive::from(*through)) {
        return Err(GeometryError::DegenerateInput {
            detail: "circle_centered requires a center distinct from its defining point".into(),
        });
    }
    let dx = through.x - center.x;
    let dy = through.y - center.y;
    let r = (dx * dx + dy * dy).sqrt();
    Ok(Circle::new(center.x, center.y, r))
}

/// Intersection of two lines: zero or one point (parallel/coincident lines
/// yield zero — not an error, per §7).
#[must_use]
pub fn intersect_line_line(l1: &Line, l2: &Line) -> Vec<Point> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if det.abs() < EPSILON_NUMERIC {
        return Vec::new();
    }
    let x = (l2.b * (-l1.c) - l1.b * (-l2.c)) / det;
    let y = (l1.a * (-l2.c) - l2.a * (-l1.c)) / det;
    vec![Point::new(x, y)]
}

/// Intersection of a line and a circle: zero, one (tangent), or two points.
///
/// Assumes `line` is already normalized (`a² + b² = 1`) — true for every
/// `Line` that has passed through [`canonicalize`].
#[must_use]
pub fn intersect_line_circle(line: &Line, circle: &Circle) -> Vec<Point> {
    // Closest point on the line to the origin, and a unit direction vector.
    let p0 = Point::new(-line.a * line.c, -line.b * line.c);
    let (dx, dy) = (-line.b, line.a);

    let ux = p0.x - circle.cx;
    let uy = p0.y - circle.cy;
    let proj = ux * dx + uy * dy;
    let c = ux * ux + uy * uy - circle.r * circle.r;
    let disc = proj * proj - c;

    let mut points = if disc < -EPSILON_NUMERIC {
        Vec::new()
    } else if disc.abs() <= EPSILON_NUMERIC {
        let t = -proj;
        vec![Point::new(p0.x + t * dx, p0.y + t * dy)]
    } else {
        let root = disc.sqrt();
        let t1 = -proj - root;
        let t2 = -proj + root;
        vec![
            Point::new(p0.x + t1 * dx, p0.y + t1 * dy),
            Point::new(p0.x + t2 * dx, p0.y + t2 * dy),
        ]
    };
    sort_by_canonical_lex(&mut points);
    points
}

/// Intersection of two circles via the classical radical-line
/// construction: zero, one (tangent), or two points.
#[must_use]
pub fn intersect_circle_circle(a: &Circle, b: &Circle) -> Vec<Point> {
    let dx = b.cx - a.cx;
    let dy = b.cy - a.cy;
    let d2 = dx * dx + dy * dy;
    let d = d2.sqrt();
    if d < EPSILON_NUMERIC {
        // Concentric (or near-concentric): either no intersection or
        // infinitely many. Neither is a finite point set; yield none.
        return Vec::new();
    }

    let a_dist = (d2 + a.r * a.r - b.r * b.r) / (2.0 * d);
    let h2 = a.r * a.r - a_dist * a_dist;

    let ux = dx / d;
    let uy = dy / d;
    let foot = Point::new(a.cx + a_dist * ux, a.cy + a_dist * uy);

    let mut points = if h2 < -EPSILON_NUMERIC {
        Vec::new()
    } else if h2.abs() <= EPSILON_NUMERIC {
        vec![foot]
    } else {
        let h = h2.sqrt();
        // (-uy, ux) is the unit perpendicular to A->B, rotated +90°.
        let px = -uy;
        let py = ux;
        vec![
            Point::new(foot.x - h * px, foot.y - h * py),
            Point::new(foot.x + h * px, foot.y + h * py),
        ]
    };
    sort_by_canonical_lex(&mut points);
    points
}

/// §4.2 Determinism: when an operation yields two points, the first is the
/// one with the smaller lexicographic `(x, y)`, so later dedup is
/// order-independent regardless of which internal construction order (`t`,
/// orientation) produced them. Point canonicalization is an identity
/// transform on coordinates (only finiteness is checked), so sorting on raw
/// `(x, y)` already matches the canonical order.
fn sort_by_canonical_lex(points: &mut [Point]) {
    points.sort_by(|p, q| {
        p.x.partial_cmp(&q.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(p.y.partial_cmp(&q.y).unwrap_or(std::cmp::Ordering::Equal))
    });
}
