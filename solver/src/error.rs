//! Typed input-validation failures (§7). Surfaced before any search runs.

/// Typed failure for problem parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A `known` or the `target` was malformed: missing/wrong-typed JSON
    /// fields, duplicated IDs, non-finite coordinates, a line whose
    /// `(a, b)` cannot be normalized, or a circle with `r <= ε_canon`.
    InvalidInput { detail: String },
    /// Two `knowns` share a canonical identity.
    DegenerateInput { detail: String },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { detail } => write!(f, "invalid input: {detail}"),
            Self::DegenerateInput { detail } => write!(f, "degenerate input: {detail}"),
        }
    }
}

impl std::error::Error for SolveError {}
