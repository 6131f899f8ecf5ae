//! Compass Kernel: the pure, deterministic geometric core.
//!
//! # API Surface
//!
//! - [`geometry`] -- the closed `Primitive` sum type (`Point`, `Line`, `Circle`)
//! - [`predicates`] -- sign-exact `orient`/`on_line`/`on_circle` tests
//! - [`canonical`] -- normalization and content-addressed identity
//! - [`kernels`] -- the three constructive operations: `line_through`,
//!   `circle_centered`, `intersect`
//! - [`hash`] -- the domain-separated SHA-256 identity scheme canonical
//!   identities are built on
//!
//! # Module Dependency Direction
//!
//! `geometry` ← `predicates`, `hash` ← `canonical` ← `kernels`
//!
//! One-way only. No cycles. `kernels` depends on `canonical` (and, through
//! it, `hash`) and `geometry`. `canonical` depends on `geometry` and `hash`.
//! `predicates` depends only on `geometry`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod kernels;
pub mod predicates;
pub mod tolerance;
