//! Typed kernel failures.

/// Typed failure for geometry construction and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Two operands that a kernel operation requires to be distinct share a
    /// canonical identity (e.g. `line_through(P, P)`).
    DegenerateInput { detail: String },
    /// A raw primitive could not be normalized into canonical form (e.g. a
    /// line with `a = b = 0`, a circle with `r <= ε_canon`, or a
    /// non-finite coordinate).
    InvalidInput { detail: String },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateInput { detail } => write!(f, "degenerate input: {detail}"),
            Self::InvalidInput { detail } => write!(f, "invalid input: {detail}"),
        }
    }
}

impl std::error::Error for GeometryError {}
