//! Problem parsing (§6 "Problem"): the JSON wire shape for `knowns` and
//! `target`, translated into kernel primitives.

use serde_json::Value;

use compass_kernel::geometry::{Circle, Line, Point, Primitive};

use crate::error::SolveError;

/// One entry of `knowns`: a caller-supplied ID paired with a primitive.
#[derive(Debug, Clone)]
pub struct Known {
    pub id: String,
    pub primitive: Primitive,
}

/// A parsed, not-yet-validated construction problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub knowns: Vec<Known>,
    pub target: Primitive,
}

impl Problem {
    /// Parse from the §6 JSON shape:
    /// `{ "knowns": [{ "id": "...", "primitive": {...} }, ...], "target": {...} }`.
    ///
    /// `target` may be a bare primitive object or `{ "id": ..., "primitive": {...} }`
    /// — its `id`, if present, is ignored (§6: "used only for matching").
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] for any structurally malformed
    /// field. Does not check for duplicate IDs or degenerate `knowns` —
    /// that is [`crate::validate`]'s job, once primitives are canonical.
    pub fn from_json(value: &Value) -> Result<Self, SolveError> {
        let obj = value.as_object().ok_or_else(|| SolveError::InvalidInput {
            detail: "problem must be a JSON object".into(),
        })?;

        let knowns_value = obj.get("knowns").ok_or_else(|| SolveError::InvalidInput {
            detail: "problem missing \"knowns\"".into(),
        })?;
        let knowns_array = knowns_value
            .as_array()
            .ok_or_else(|| SolveError::InvalidInput {
                detail: "\"knowns\" must be an array".into(),
            })?;

        let mut knowns = Vec::with_capacity(knowns_array.len());
        for entry in knowns_array {
            knowns.push(parse_known(entry)?);
        }

        let target_value = obj.get("target").ok_or_else(|| SolveError::InvalidInput {
            detail: "problem missing \"target\"".into(),
        })?;
        let target = parse_target(target_value)?;

        Ok(Self { knowns, target })
    }
}

fn parse_known(value: &Value) -> Result<Known, SolveError> {
    let obj = value.as_object().ok_or_else(|| SolveError::InvalidInput {
        detail: "each known must be a JSON object".into(),
    })?;
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| SolveError::InvalidInput {
            detail: "known missing non-empty string \"id\"".into(),
        })?;
    if id.is_empty() {
        return Err(SolveError::InvalidInput {
            detail: "known \"id\" must be non-empty".into(),
        });
    }
    let primitive_value = obj
        .get("primitive")
        .ok_or_else(|| SolveError::InvalidInput {
            detail: format!("known \"{id}\" missing \"primitive\""),
        })?;
    let primitive = parse_primitive(primitive_value)?;
    Ok(Known {
        id: id.to_string(),
        primitive,
    })
}

/// Accepts either `{ "id": ..., "primitive": {...} }` or a bare primitive
/// object for `target`.
fn parse_target(value: &Value) -> Result<Primitive, SolveError> {
    if let Some(obj) = value.as_object() {
        if let Some(primitive_value) = obj.get("primitive") {
            return parse_primitive(primitive_value);
        }
    }
    parse_primitive(value)
}

fn parse_primitive(value: &Value) -> Result<Primitive, SolveError> {
    let obj = value.as_object().ok_or_else(|| SolveError::InvalidInput {
        detail: "primitive must be a JSON object".into(),
    })?;
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SolveError::InvalidInput {
            detail: "primitive missing string \"type\"".into(),
        })?;

    match tag {
        "point" => {
            let coords = read_number_array(obj, "coords", 2)?;
            Ok(Primitive::Point(Point::new(coords[0], coords[1])))
        }
        "line" => {
            let definition =
                obj.get("definition")
                    .and_then(Value::as_object)
                    .ok_or_else(|| SolveError::InvalidInput {
                        detail: "line primitive missing \"definition\" object".into(),
                    })?;
            let coeffs = read_number_array(definition, "coeffs", 3)?;
            Ok(Primitive::Line(Line::new(coeffs[0], coeffs[1], coeffs[2])))
        }
        "circle" => {
            let definition =
                obj.get("definition")
                    .and_then(Value::as_object)
                    .ok_or_else(|| SolveError::InvalidInput {
                        detail: "circle primitive missing \"definition\" object".into(),
                    })?;
            let center = read_number_array(definition, "center", 2)?;
            let radius = definition
                .get("radius")
                .and_then(Value::as_f64)
                .ok_or_else(|| SolveError::InvalidInput {
                    detail: "circle definition missing numeric \"radius\"".into(),
                })?;
            Ok(Primitive::Circle(Circle::new(center[0], center[1], radius)))
        }
        other => Err(SolveError::InvalidInput {
            detail: format!("unknown primitive type \"{other}\""),
        }),
    }
}

fn read_number_array(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    len: usize,
) -> Result<Vec<f64>, SolveError> {
    let array = obj
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| SolveError::InvalidInput {
            detail: format!("missing array field \"{field}\""),
        })?;
    if array.len() != len {
        return Err(SolveError::InvalidInput {
            detail: format!("\"{field}\" must have exactly {len} numbers"),
        });
    }
    array
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| SolveError::InvalidInput {
                detail: format!("\"{field}\" must contain only numbers"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_problem() {
        let value = json!({
            "knowns": [
                {"id": "A", "primitive": {"type": "point", "coords": [0.0, 0.0]}},
                {"id": "B", "primitive": {"type": "point", "coords": [4.0, 0.0]}},
            ],
            "target": {"type": "point", "coords": [2.0, 0.0]},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert_eq!(problem.knowns.len(), 2);
        assert_eq!(problem.knowns[0].id, "A");
        assert!(matches!(problem.target, Primitive::Point(_)));
    }

    #[test]
    fn parses_line_and_circle() {
        let value = json!({
            "knowns": [
                {"id": "L", "primitive": {"type": "line", "definition": {"coeffs": [1.0, 0.0, 0.0]}}},
            ],
            "target": {"type": "circle", "definition": {"center": [0.0, 0.0], "radius": 5.0}},
        });
        let problem = Problem::from_json(&value).unwrap();
        assert!(matches!(problem.knowns[0].primitive, Primitive::Line(_)));
        assert!(matches!(problem.target, Primitive::Circle(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let value = json!({"knowns": []});
        assert!(matches!(
            Problem::from_json(&value),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_empty_id() {
        let value = json!({
            "knowns": [{"id": "", "primitive": {"type": "point", "coords": [0.0, 0.0]}}],
            "target": {"type": "point", "coords": [0.0, 0.0]},
        });
        assert!(matches!(
            Problem::from_json(&value),
            Err(SolveError::InvalidInput { .. })
        ));
    }
}
