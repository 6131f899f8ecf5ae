//! Robust predicates (§4.1): sign-only answers to geometric questions,
//! computed so the returned sign matches the true sign of the underlying
//! polynomial in the given double-precision inputs, regardless of rounding.

pub mod expansion;

use crate::geometry::{Circle, Line, Point};

/// The sign of a robust predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[must_use]
    pub const fn from_f64(v: f64) -> Self {
        if v > 0.0 {
            Self::Positive
        } else if v < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    #[must_use]
    fn from_i32(v: i32) -> Self {
        if v > 0 {
            Self::Positive
        } else if v < 0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// Sign of the signed area of triangle `pqr`; zero iff `p`, `q`, `r` are
/// collinear. Backed directly by the `robust` crate's adaptive-precision
/// `orient2d`, which already implements Shewchuk's fast-path-then-exact
/// technique — there is nothing to add on top of it.
#[must_use]
pub fn orient(p: &Point, q: &Point, r: &Point) -> Sign {
    let value = robust::orient2d(
        robust::Coord { x: p.x, y: p.y },
        robust::Coord { x: q.x, y: q.y },
        robust::Coord { x: r.x, y: r.y },
    );
    Sign::from_f64(value)
}

/// Sign of `a*p.x + b*p.y + c`.
///
/// Fast path: evaluate in plain `f64` and compare against a conservative
/// error bound. Fallback: exact expansion summation of the three
/// (two-way-split) product/constant terms.
#[must_use]
pub fn on_line(p: &Point, line: &Line) -> Sign {
    let fast = line.eval(p.x, p.y);
    let bound = error_bound_on_line(p, line);
    if fast.abs() > bound {
        return Sign::from_f64(fast);
    }

    let (p1, e1) = expansion::two_product(line.a, p.x);
    let (p2, e2) = expansion::two_product(line.b, p.y);
    Sign::from_i32(expansion::exact_sign(&[p1, e1, p2, e2, line.c]))
}

/// Sign of `(p.x - cx)² + (p.y - cy)² - r²`.
///
/// Same fast-path / exact-fallback structure as [`on_line`]. `p.x - cx` is
/// itself only exact to a `(dx, dx_err)` pair (`two_diff`, not a plain
/// subtraction), so squaring it exactly means expanding
/// `(dx + dx_err)² = dx² + 2·dx·dx_err + dx_err²` in full — every term below
/// is fed through `two_product`, including the cross and `dx_err²`/`dy_err²`
/// terms, so the summed expansion's sign matches the true sign exactly, the
/// same guarantee `orient` gets from `robust::orient2d`.
#[must_use]
pub fn on_circle(p: &Point, circle: &Circle) -> Sign {
    let fast = circle.eval(p.x, p.y);
    let bound = error_bound_on_circle(p, circle);
    if fast.abs() > bound {
        return Sign::from_f64(fast);
    }

    let (dx, dx_err) = expansion::two_diff(p.x, circle.cx);
    let (dy, dy_err) = expansion::two_diff(p.y, circle.cy);
    let (dx2, dx2_err) = expansion::two_product(dx, dx);
    let (dy2, dy2_err) = expansion::two_product(dy, dy);
    let (r2, r2_err) = expansion::two_product(circle.r, circle.r);

    // (dx + dx_err)² = dx² + 2·dx·dx_err + dx_err², all three terms exact:
    // 2.0 * dx is exact (power-of-two scaling never rounds), so the cross
    // term's two_product is exact too, and dx_err² is just another product.
    let (dx_cross, dx_cross_err) = expansion::two_product(2.0 * dx, dx_err);
    let (dx_err2, dx_err2_err) = expansion::two_product(dx_err, dx_err);
    let (dy_cross, dy_cross_err) = expansion::two_product(2.0 * dy, dy_err);
    let (dy_err2, dy_err2_err) = expansion::two_product(dy_err, dy_err);

    Sign::from_i32(expansion::exact_sign(&[
        dx2,
        dx2_err,
        dx_cross,
        dx_cross_err,
        dx_err2,
        dx_err2_err,
        dy2,
        dy2_err,
        dy_cross,
        dy_cross_err,
        dy_err2,
        dy_err2_err,
        -r2,
        -r2_err,
    ]))
}

/// Conservative error bound for the fast path of [`on_line`]: a small
/// constant multiple of machine epsilon times the magnitude of the terms
/// summed, enough operations of slack (three products, two additions) to
/// dominate any realistic rounding error without needing the tight
/// analysis Shewchuk derives per-predicate.
fn error_bound_on_line(p: &Point, line: &Line) -> f64 {
    const SLACK: f64 = 8.0;
    SLACK
        * f64::EPSILON
        * (line.a.abs() * p.x.abs() + line.b.abs() * p.y.abs() + line.c.abs() + 1.0)
}

fn error_bound_on_circle(p: &Point, circle: &Circle) -> f64 {
    const SLACK: f64 = 16.0;
    let dx = p.x - circle.cx;
    let dy = p.y - circle.cy;
    SLACK * f64::EPSILON * (dx * dx + dy * dy + circle.r * circle.r + 1.0)
}
