//! Parses caller overrides of [`compass_search::policy::Limits`] from the
//! JSON request (§6 "Defaults and limits").

use serde_json::Value;

use compass_search::policy::Limits;

use crate::error::SolveError;

/// Read optional `max_depth` / `max_states` / `wall_ms` overrides from the
/// top-level request object, layered onto [`Limits::default`]. Absent
/// fields keep the default; present fields must be the right JSON type.
///
/// # Errors
///
/// [`SolveError::InvalidInput`] if a present override field is the wrong
/// JSON type or out of range (e.g. negative, overflowing its target
/// integer width).
pub fn parse_overrides(value: &Value) -> Result<Limits, SolveError> {
    let mut limits = Limits::default();
    let Some(obj) = value.as_object() else {
        return Ok(limits);
    };

    if let Some(v) = obj.get("max_depth") {
        limits.max_depth = v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| SolveError::InvalidInput {
                detail: "\"max_depth\" must be a non-negative integer".into(),
            })?;
    }
    if let Some(v) = obj.get("max_states") {
        limits.max_states = v.as_u64().ok_or_else(|| SolveError::InvalidInput {
            detail: "\"max_states\" must be a non-negative integer".into(),
        })?;
    }
    if let Some(v) = obj.get("wall_ms") {
        if v.is_null() {
            limits.wall_ms = None;
        } else {
            limits.wall_ms = Some(v.as_u64().ok_or_else(|| SolveError::InvalidInput {
                detail: "\"wall_ms\" must be a non-negative integer or null".into(),
            })?);
        }
    }

    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_overrides_keep_defaults() {
        let limits = parse_overrides(&json!({"knowns": [], "target": {}})).unwrap();
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn overrides_apply() {
        let limits = parse_overrides(&json!({
            "max_depth": 8,
            "max_states": 1000,
            "wall_ms": 250,
        }))
        .unwrap();
        assert_eq!(limits.max_depth, 8);
        assert_eq!(limits.max_states, 1000);
        assert_eq!(limits.wall_ms, Some(250));
    }

    #[test]
    fn rejects_wrong_typed_override() {
        assert!(matches!(
            parse_overrides(&json!({"max_depth": "deep"})),
            Err(SolveError::InvalidInput { .. })
        ));
    }
}
