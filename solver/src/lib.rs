//! Compass Solver: the single external entry point (§6) — `solve(problem,
//! limits) -> result` — wiring JSON parsing, validation, the search
//! engine, and result encoding together.
//!
//! # API Surface
//!
//! - [`solve`] -- parse, validate, search, and encode a JSON request in
//!   one call. Returns `Err(error::SolveError)` for malformed or
//!   degenerate input (§7: "Returned immediately; no search performed"),
//!   never runs a search in that case.
//! - [`problem::Problem`] -- the parsed `{knowns, target}` wire shape.
//! - [`validate::validate`] -- canonicalizes and checks a [`problem::Problem`].
//! - [`limits::parse_overrides`] -- reads `max_depth`/`max_states`/`wall_ms`
//!   overrides from the request, layered on [`compass_search::policy::Limits::default`].
//! - [`result::encode`] -- turns a [`compass_search::engine::Outcome`] into
//!   the §6 JSON response shape.
//!
//! # Crate dependency graph
//!
//! ```text
//! compass_kernel  ←  compass_search  ←  compass_solver
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod limits;
pub mod problem;
pub mod result;
pub mod validate;

use std::time::Instant;

use serde_json::Value;

pub use error::SolveError;

/// Run `solve(problem, limits) -> result` (§6) against a raw JSON request.
///
/// The request is the problem's own JSON object (`{"knowns": [...],
/// "target": {...}}`), optionally carrying `max_depth`/`max_states`/
/// `wall_ms` overrides alongside those fields (§6 "Defaults and limits").
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] or [`SolveError::DegenerateInput`]
/// (§7) for any malformed or degenerate request; no search is performed in
/// that case. A budget being exhausted, or the target being proven
/// unreachable within `max_depth`, is not an error — both are encoded in
/// the returned JSON as `{"status": "unsolved", "reason": ...}` (§6).
pub fn solve(request: &Value) -> Result<Value, SolveError> {
    let started = Instant::now();

    let parsed = problem::Problem::from_json(request)?;
    let valid = validate::validate(&parsed)?;
    let limits = limits::parse_overrides(request)?;

    let outcome = compass_search::engine::search(
        &valid.known_primitives,
        &valid.target,
        &limits,
        None,
    );

    let calculation_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    Ok(result::encode(&outcome, &valid.known_ids, calculation_time_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trivial_known_equals_target_solves_in_zero_steps() {
        let request = json!({
            "knowns": [{"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}}],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        let value = solve(&request).unwrap();
        assert_eq!(value["status"], "solved");
        assert_eq!(value["steps"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn invalid_request_is_rejected_before_search() {
        let request = json!({"knowns": []});
        assert!(matches!(solve(&request), Err(SolveError::InvalidInput { .. })));
    }

    #[test]
    fn degenerate_knowns_are_rejected_before_search() {
        let request = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "B", "primitive": {"type": "point", "coords": [1e-10, 0.0]}},
            ],
            "target": {"type": "point", "coords": [5.0, 5.0]},
        });
        assert!(matches!(
            solve(&request),
            Err(SolveError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn unreachable_within_budget_reports_unsolved() {
        let request = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "B", "primitive": {"type": "point", "coords": [1.0, 0.0]}},
            ],
            "target": {"type": "circle", "definition": {"center": [0.0, 0.0], "radius": std::f64::consts::PI}},
            "max_depth": 8,
        });
        let value = solve(&request).unwrap();
        assert_eq!(value["status"], "unsolved");
        assert_eq!(value["reason"], "proven_unreachable");
    }
}
