//! Typed search-engine failures.
//!
//! Kernel-level failures during expansion (parallel lines, empty
//! intersection, a too-small circle) are *not* errors — the engine treats
//! them as "this candidate produced nothing" and moves on (§7). The
//! variants here are reserved for conditions that indicate a broken
//! invariant rather than an ordinary dead end.

/// Typed failure for search-engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A parent arena index referenced by a state does not resolve to a
    /// live state. Indicates a bug in state construction, not bad input.
    InvariantViolation { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvariantViolation { detail } => {
                write!(f, "search invariant violation: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
