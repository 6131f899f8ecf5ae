//! Tolerances shared across canonicalization and the geometric kernels.

/// Quantization tolerance for canonical identity (§3). Two primitives whose
/// raw attributes differ by less than this produce identical identities.
pub const EPSILON_CANON: f64 = 1e-9;

/// Numerical tolerance for kernel degeneracy decisions (§4.2): a
/// line/line determinant or a discriminant smaller in magnitude than this
/// is treated as exactly zero.
pub const EPSILON_NUMERIC: f64 = 1e-12;
