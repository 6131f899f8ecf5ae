//! Search-run statistics returned alongside a `solve` outcome (§6
//! `performance`). Deliberately small: this core has no persisted-bundle
//! audit requirement, so there is nothing here beyond what a caller needs
//! to judge how hard the search worked.

/// Counters accumulated over the course of one `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Total states popped from the open set and expanded.
    pub states_explored: u64,
    /// Total successor states generated (including ones later pruned).
    pub states_generated: u64,
    /// Largest the open set ever grew to.
    pub frontier_high_water: u64,
}
