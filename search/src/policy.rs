//! Search budgets (§4.5 "Input": `limits`). All limits are hard ceilings.

/// Budget configuration for a single `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum construction-step depth explored.
    pub max_depth: u32,
    /// Maximum number of states the engine may generate.
    pub max_states: u64,
    /// Optional wall-clock budget in milliseconds, enforced cooperatively
    /// (checked on each pop and every 1024 expansions, per §5).
    pub wall_ms: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 12,
            max_states: 200_000,
            wall_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let limits = Limits::default();
        assert_eq!(limits.max_depth, 12);
        assert_eq!(limits.max_states, 200_000);
        assert_eq!(limits.wall_ms, None);
    }
}
