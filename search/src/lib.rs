//! Compass Search: deterministic best-first exploration of construction
//! states, built on `compass_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! compass_kernel  ←  compass_search  ←  compass_solver
//! (geometry/predicates)  (frontier, states, engine)  (public solve())
//! ```
//!
//! # Key types
//!
//! - [`state::State`] — an immutable construction-sequence node
//! - [`frontier::BestFirstFrontier`] — the best-first open set
//! - [`heuristic::estimate`] — the admissible lower bound (§4.4)
//! - [`engine::search`] — the top-level best-first loop (§4.5)
//! - [`policy::Limits`] — search budgets
//! - [`stats::SearchStats`] — run counters returned alongside the outcome

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod policy;
pub mod state;
pub mod stats;
