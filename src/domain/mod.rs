//! Domain layer containing the decision model and the ranking engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fuzzy numbers, linguistic scales, errors)
//! - `assessment` - Expert judgments and the edits applied to them
//! - `vikor` - Pure fuzzy VIKOR pipeline (aggregation through acceptance)

pub mod assessment;
pub mod foundation;
pub mod vikor;
