//! Fuzzy VIKOR ranking pipeline.
//!
//! Pure functions over aggregated fuzzy matrices:
//! - `Aggregator` - Mean of expert judgments
//! - `ReferenceExtractor` - Direction-aware ideal and anti-ideal
//! - `Normalizer` - Fuzzy normalized deviation from the ideal
//! - `Weighter` - Applies criteria weights
//! - `UtilityAggregator` - Group utility S and individual regret R
//! - `CompromiseRanker` - Compromise index Q and rankings
//! - `CompromiseResult` - Acceptance conditions
//! - `VikorEngine` - Runs all of the above

mod acceptance;
mod aggregator;
mod compromise_ranker;
mod engine;
mod normalizer;
mod reference;
mod utility;
mod weighter;

use crate::domain::foundation::TriangularFuzzyNumber;

/// Fuzzy matrix indexed `[alternative][criterion]`.
pub type FuzzyMatrix = Vec<Vec<TriangularFuzzyNumber>>;

pub use acceptance::{AcceptanceCheck, CompromiseResult};
pub use aggregator::Aggregator;
pub use compromise_ranker::{
    rank_positions, CompromiseIndex, CompromiseRanker, RankingEntry, UtilityExtrema,
};
pub use engine::{EngineSettings, VikorEngine, VikorOutcome};
pub use normalizer::Normalizer;
pub use reference::{ReferenceExtractor, ReferencePoints};
pub use utility::{UtilityAggregator, UtilityMeasures};
pub use weighter::Weighter;
