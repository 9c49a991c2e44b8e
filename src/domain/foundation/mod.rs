//! Foundation module - Shared domain primitives.
//!
//! Contains the fuzzy number type, linguistic scales, and the small value
//! objects and error types that form the vocabulary of the engine.

mod criterion_direction;
mod defuzzification;
mod errors;
mod linguistic;
mod strategy_weight;
mod tfn;

pub use criterion_direction::CriterionDirection;
pub use defuzzification::Defuzzification;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use linguistic::{ImportanceTerm, LinguisticTerm, PerformanceTerm};
pub use strategy_weight::StrategyWeight;
pub use tfn::{safe_div, sanitize, TriangularFuzzyNumber};
