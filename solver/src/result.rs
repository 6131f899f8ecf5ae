//! Result encoding (§6 "Result", "Step object"): translates a
//! [`compass_search::engine::Outcome`] into the JSON wire shape, assigning
//! generated `p{n}`/`l{n}`/`c{n}` IDs to intermediate primitives in
//! construction order.

use serde_json::{json, Value};

use compass_kernel::geometry::Primitive;
use compass_search::engine::{Outcome, PathStep, UnsolvedReason};
use compass_search::stats::SearchStats;

/// Assigns display IDs to a solved path's primitive sequence: `knowns`
/// keep their caller-supplied IDs; everything constructed during the
/// search gets a generated `p{n}` (point), `l{n}` (line), or `c{n}`
/// (circle) ID, numbered separately per kind in the order each first
/// appears (§4.5 "Step reporting").
struct IdAssigner {
    ids: Vec<String>,
    next_point: u32,
    next_line: u32,
    next_circle: u32,
}

impl IdAssigner {
    fn new(known_ids: &[String], primitives: &[Primitive]) -> Self {
        let mut assigner = Self {
            ids: Vec::with_capacity(primitives.len()),
            next_point: 1,
            next_line: 1,
            next_circle: 1,
        };
        for id in known_ids {
            assigner.ids.push(id.clone());
        }
        for primitive in &primitives[known_ids.len()..] {
            assigner.ids.push(assigner.generate(primitive));
        }
        assigner
    }

    fn generate(&mut self, primitive: &Primitive) -> String {
        match primitive {
            Primitive::Point(_) => {
                let id = format!("p{}", self.next_point);
                self.next_point += 1;
                id
            }
            Primitive::Line(_) => {
                let id = format!("l{}", self.next_line);
                self.next_line += 1;
                id
            }
            Primitive::Circle(_) => {
                let id = format!("c{}", self.next_circle);
                self.next_circle += 1;
                id
            }
        }
    }

    fn id_of(&self, index: usize) -> &str {
        &self.ids[index]
    }
}

fn type_name(primitive: &Primitive) -> &'static str {
    match primitive {
        Primitive::Point(_) => "point",
        Primitive::Line(_) => "line",
        Primitive::Circle(_) => "circle",
    }
}

fn operation_name(op: compass_search::state::OperationKind) -> &'static str {
    use compass_search::state::OperationKind;
    match op {
        OperationKind::Line => "Line",
        OperationKind::Circle => "Circle",
        OperationKind::Intersection => "Intersection",
    }
}

fn encode_step(index: usize, step: &PathStep, ids: &IdAssigner) -> Value {
    json!({
        "step": index + 1,
        "operation": operation_name(step.operation),
        "inputs": [ids.id_of(step.input_a), ids.id_of(step.input_b)],
        "output": {
            "type": type_name(&step.produced),
            "id": ids.id_of(step.produced_index),
        },
    })
}

fn encode_performance(stats: &SearchStats, calculation_time_ms: f64) -> Value {
    json!({
        "calculation_time_ms": calculation_time_ms,
        "states_explored": stats.states_explored,
        "states_generated": stats.states_generated,
        "frontier_high_water": stats.frontier_high_water,
    })
}

fn reason_name(reason: UnsolvedReason) -> &'static str {
    match reason {
        UnsolvedReason::DepthExhausted => "depth_exhausted",
        UnsolvedReason::StateBudgetExhausted => "state_budget_exhausted",
        UnsolvedReason::TimeBudgetExhausted => "time_budget_exhausted",
        UnsolvedReason::ProvenUnreachable => "proven_unreachable",
    }
}

/// Encode a search [`Outcome`] into the §6 JSON response shape.
/// `known_ids` must be in the same order as the `knowns` the search was
/// given (`Outcome::Solved::primitives`/root primitives start with them).
#[must_use]
pub fn encode(outcome: &Outcome, known_ids: &[String], calculation_time_ms: f64) -> Value {
    match outcome {
        Outcome::Solved {
            steps,
            primitives,
            stats,
        } => {
            let ids = IdAssigner::new(known_ids, primitives);
            let steps_json: Vec<Value> = steps
                .iter()
                .enumerate()
                .map(|(i, step)| encode_step(i, step, &ids))
                .collect();
            json!({
                "status": "solved",
                "steps": steps_json,
                "performance": encode_performance(stats, calculation_time_ms),
            })
        }
        Outcome::Unsolved { reason, stats } => json!({
            "status": "unsolved",
            "reason": reason_name(*reason),
            "performance": encode_performance(stats, calculation_time_ms),
        }),
    }
}
