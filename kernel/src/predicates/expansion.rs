//! Error-free floating-point transformations used to back the predicates
//! that cannot be expressed as a single call into the `robust` crate.
//!
//! These are the same building blocks (`two_sum`, `two_product` via Dekker
//! splitting / hardware FMA, and expansion growth by repeated `two_sum`
//! merging) that Jonathan Shewchuk's adaptive-precision predicates — and
//! therefore the `robust` crate itself — are built from. See Shewchuk,
//! *Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//! Predicates* (1997).

/// Knuth's exact sum: returns `(sum, err)` such that `a + b == sum + err`
/// exactly, for any `a`, `b` (no magnitude ordering required).
#[must_use]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let sum = a + b;
    let bv = sum - a;
    let av = sum - bv;
    let err = (a - av) + (b - bv);
    (sum, err)
}

/// Exact difference: `(diff, err)` with `a - b == diff + err` exactly.
#[must_use]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
    two_sum(a, -b)
}

/// Exact product: `(prod, err)` such that `a * b == prod + err` exactly.
///
/// Uses the hardware fused-multiply-add (`f64::mul_add`), which on every
/// target this workspace builds for computes `a*b + c` with a single
/// rounding — the standard modern replacement for Dekker's two-way
/// mantissa split.
#[must_use]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
    let prod = a * b;
    let err = a.mul_add(b, -prod);
    (prod, err)
}

/// Grow a non-overlapping expansion `e` (components in increasing order of
/// magnitude) by one more term `b`, producing a new non-overlapping
/// expansion. Shewchuk's `grow-expansion`.
fn grow_expansion(e: &[f64], b: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(e.len() + 1);
    let mut q = b;
    for &ei in e {
        let (sum, err) = two_sum(q, ei);
        q = sum;
        if err != 0.0 {
            out.push(err);
        }
    }
    out.push(q);
    out
}

/// Build a non-overlapping expansion representing the exact sum of `terms`
/// (each of which is itself already an exact partial sum/product
/// component, e.g. from [`two_sum`]/[`two_product`]).
fn expansion_of(terms: &[f64]) -> Vec<f64> {
    let mut e: Vec<f64> = Vec::new();
    for &t in terms {
        if t != 0.0 {
            e = grow_expansion(&e, t);
        }
    }
    e
}

/// The sign of a nonzero non-overlapping expansion equals the sign of its
/// most significant (largest-magnitude) component — the remaining
/// components sum to strictly less in magnitude than that leading term.
/// Returns `0` for the empty expansion (the exact value is zero).
#[must_use]
fn sign_of_expansion(e: &[f64]) -> i32 {
    match e.last() {
        None => 0,
        Some(&last) => {
            if last > 0.0 {
                1
            } else if last < 0.0 {
                -1
            } else {
                0
            }
        }
    }
}

/// Compute the exact sign of the sum of `terms` by building the
/// non-overlapping expansion and reading off its leading component's sign.
#[must_use]
pub fn exact_sign(terms: &[f64]) -> i32 {
    sign_of_expansion(&expansion_of(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_is_exact_for_catastrophic_cancellation() {
        let a = 1e16;
        let b = 1.0;
        let (sum, err) = two_sum(a, b);
        // a + b rounds away the 1.0 in plain f64 addition; the expansion
        // {sum, err} must still represent it exactly.
        assert_eq!(sum, a + b);
        let (back, _) = two_sum(sum, err);
        assert!((back - (a + b)).abs() <= f64::EPSILON * a.abs());
    }

    #[test]
    fn two_product_recovers_exact_value_for_simple_inputs() {
        let (p, e) = two_product(3.0, 4.0);
        assert_eq!(p, 12.0);
        assert_eq!(e, 0.0);
    }

    #[test]
    fn exact_sign_matches_obvious_cases() {
        assert_eq!(exact_sign(&[1.0, 2.0, 3.0]), 1);
        assert_eq!(exact_sign(&[-1.0, -2.0]), -1);
        assert_eq!(exact_sign(&[]), 0);
        assert_eq!(exact_sign(&[1.0, -1.0]), 0);
    }

    #[test]
    fn exact_sign_resolves_near_cancellation() {
        // 1e300 + 1.0 - 1e300 should resolve to exactly positive, not 0.0
        // as a naive f64 sum would give.
        let terms = [1e300, 1.0, -1e300];
        assert_eq!(exact_sign(&terms), 1);
    }
}
