//! Analysis Module - Pure domain services for multi-criteria scoring.
//!
//! This module contains the stages of a run, applied in order to a
//! validated snapshot of the registries.
//!
//! # Components
//!
//! - `DecisionMatrix` - Immutable criteria x alternatives snapshot
//! - `Normalizer` - Direction-aware min-max scaling into `[0, 1]`
//! - `WeightStrategy` - Pluggable weight derivation (equal, entropy, fixed)
//! - `ScoringEngine` - Weighted contributions, totals and percentages
//! - `Ranker` - Stable descending order with registration-order tie-break
//! - `ResultAssembler` - Packages the sections requested by `RunOptions`
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results, so repeated runs over the
//! same snapshot produce bit-identical output.

mod decision_matrix;
mod normalizer;
mod ranker;
mod result;
mod scoring;
mod weighting;

pub use decision_matrix::{DatasetLimits, DecisionMatrix, DecisionMatrixBuilder};
pub use normalizer::{CriterionRange, NormalizedMatrix, Normalizer};
pub use ranker::{RankedAlternative, Ranker};
pub use result::{
    AlternativesContribution, ContributionReport, DecisionResult, RankEntry, ResultAssembler,
    RunOptions,
};
pub use scoring::{Contribution, Scores, ScoringEngine};
pub use weighting::{
    EntropyWeights, EqualWeights, FixedWeights, WeightStrategy, WeightingMethod, Weights,
    WEIGHT_SUM_TOLERANCE,
};
