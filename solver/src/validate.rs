//! Input validation (§7): surfaces `InvalidInput`/`DegenerateInput` before
//! any search state is built, per §7's table ("Returned immediately; no
//! search performed").

use std::collections::BTreeSet;

use compass_kernel::canonical::{canonicalize, same_identity};
use compass_kernel::geometry::Primitive;

use crate::error::SolveError;
use crate::problem::Problem;

/// A problem whose `knowns` and `target` have passed canonicalization and
/// the duplicate-id / degenerate-pair checks. Carries the canonical
/// primitives the search engine and result encoder operate on, alongside
/// the original known IDs in input order.
pub struct ValidProblem {
    pub known_ids: Vec<String>,
    pub known_primitives: Vec<Primitive>,
    pub target: Primitive,
}

/// Validate a parsed [`Problem`] (§7).
///
/// # Errors
///
/// - [`SolveError::InvalidInput`] for duplicated known IDs, or any
///   primitive (a known or the target) that fails canonicalization --
///   non-finite coordinates, unnormalizable line coefficients, or a
///   circle radius `<= ε_canon`.
/// - [`SolveError::DegenerateInput`] if two `knowns` share a canonical
///   identity.
pub fn validate(problem: &Problem) -> Result<ValidProblem, SolveError> {
    let mut seen_ids = BTreeSet::new();
    for known in &problem.knowns {
        if !seen_ids.insert(known.id.as_str()) {
            return Err(SolveError::InvalidInput {
                detail: format!("duplicate known id \"{}\"", known.id),
            });
        }
    }

    let mut known_primitives = Vec::with_capacity(problem.knowns.len());
    for known in &problem.knowns {
        let canon = canonicalize(&known.primitive).map_err(|e| SolveError::InvalidInput {
            detail: format!("known \"{}\": {e}", known.id),
        })?;
        known_primitives.push(canon);
    }

    for i in 0..known_primitives.len() {
        for j in (i + 1)..known_primitives.len() {
            if same_identity(&known_primitives[i], &known_primitives[j]) {
                return Err(SolveError::DegenerateInput {
                    detail: format!(
                        "knowns \"{}\" and \"{}\" share a canonical identity",
                        problem.knowns[i].id, problem.knowns[j].id
                    ),
                });
            }
        }
    }

    let target = canonicalize(&problem.target).map_err(|e| SolveError::InvalidInput {
        detail: format!("target: {e}"),
    })?;

    let known_ids = problem.knowns.iter().map(|k| k.id.clone()).collect();
    Ok(ValidProblem {
        known_ids,
        known_primitives,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_duplicate_known_ids() {
        let value = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "A", "primitive": {"type": "point", "coords": [1.0, 0.0]}},
            ],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert!(matches!(
            validate(&problem),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_pair() {
        let value = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "B", "primitive": {"type": "point", "coords": [2e-10, 0.0]}},
            ],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert!(matches!(
            validate(&problem),
            Err(SolveError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn rejects_unnormalizable_line() {
        let value = json!({
            "knowns": [
                {"id": "L", "primitive": {"type": "line", "definition": {"coeffs": [0.0, 0.0, 5.0]}}},
            ],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert!(matches!(
            validate(&problem),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_too_small_circle() {
        let value = json!({
            "knowns": [
                {"id": "C", "primitive": {"type": "circle", "definition": {"center": [0.0, 0.0], "radius": 1e-15}}},
            ],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert!(matches!(
            validate(&problem),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn accepts_well_formed_problem() {
        let value = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "B", "primitive": {"type": "point", "coords": [4.0, 0.0]}},
            ],
            "target": {"type": "point", "coords": [2.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        let valid = validate(&problem).unwrap();
        assert_eq!(valid.known_ids, vec!["A".to_string(), "B".to_string()]);
    }
}
