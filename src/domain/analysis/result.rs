//! Result Assembler - Packages ranking and contributions for callers.
//!
//! The serialized shape is what downstream report generators consume:
//!
//! ```json
//! {
//!   "rank": [["Phone D", 0.81], ["Phone B", 0.74]],
//!   "contribution": {
//!     "criteria_weights": {"price US$": 0.2},
//!     "alternatives_contribution": {
//!       "by_criteria": {"Phone D": {"price US$": 0.2}},
//!       "total_percentage": {"Phone D": 31.2}
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, RankedAlternative, Scores, Weights};
use crate::domain::foundation::{CriterionName, OptionName};

/// Which sections of the result to produce. Every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    #[serde(default = "enabled")]
    pub rank: bool,
    #[serde(default = "enabled")]
    pub contribution_global: bool,
    #[serde(default = "enabled")]
    pub contribution_detailed: bool,
}

fn enabled() -> bool {
    true
}

impl RunOptions {
    /// All sections enabled.
    pub fn all() -> Self {
        Self {
            rank: true,
            contribution_global: true,
            contribution_detailed: true,
        }
    }

    /// All sections disabled.
    pub fn none() -> Self {
        Self {
            rank: false,
            contribution_global: false,
            contribution_detailed: false,
        }
    }

    pub fn with_rank(mut self, enabled: bool) -> Self {
        self.rank = enabled;
        self
    }

    pub fn with_contribution_global(mut self, enabled: bool) -> Self {
        self.contribution_global = enabled;
        self
    }

    pub fn with_contribution_detailed(mut self, enabled: bool) -> Self {
        self.contribution_detailed = enabled;
        self
    }

    /// True if any contribution section is requested.
    pub fn wants_contribution(&self) -> bool {
        self.contribution_global || self.contribution_detailed
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// `(option name, total score)`, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry(pub OptionName, pub f64);

impl RankEntry {
    pub fn option(&self) -> &OptionName {
        &self.0
    }

    pub fn score(&self) -> f64 {
        self.1
    }
}

/// Per-alternative contribution sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativesContribution {
    /// option -> criterion -> weighted value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_criteria: Option<IndexMap<OptionName, IndexMap<CriterionName, f64>>>,
    /// option -> share of total score mass, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_percentage: Option<IndexMap<OptionName, f64>>,
}

/// Weights plus the requested per-alternative sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionReport {
    pub criteria_weights: IndexMap<CriterionName, f64>,
    pub alternatives_contribution: AlternativesContribution,
}

/// Output of a run. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Vec<RankEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution: Option<ContributionReport>,
}

impl DecisionResult {
    /// Top-ranked option, if the rank section was produced.
    pub fn winner(&self) -> Option<&OptionName> {
        self.rank
            .as_ref()
            .and_then(|entries| entries.first())
            .map(RankEntry::option)
    }

    /// Weight of a criterion, if contributions were produced.
    pub fn criterion_weight(&self, criterion: &str) -> Option<f64> {
        self.contribution
            .as_ref()
            .and_then(|c| c.criteria_weights.get(criterion))
            .copied()
    }

    /// Weighted value an option earned from a criterion, if detailed
    /// contributions were produced.
    pub fn contribution_of(&self, option: &str, criterion: &str) -> Option<f64> {
        self.contribution
            .as_ref()
            .and_then(|c| c.alternatives_contribution.by_criteria.as_ref())
            .and_then(|by| by.get(option))
            .and_then(|row| row.get(criterion))
            .copied()
    }

    /// Percentage share of an option, if global contributions were produced.
    pub fn percentage_of(&self, option: &str) -> Option<f64> {
        self.contribution
            .as_ref()
            .and_then(|c| c.alternatives_contribution.total_percentage.as_ref())
            .and_then(|pct| pct.get(option))
            .copied()
    }
}

/// Builds a [`DecisionResult`] from the computed pieces.
pub struct ResultAssembler;

impl ResultAssembler {
    /// Assembles the sections selected by `options`.
    ///
    /// Maps iterate in registration order; `rank` is in rank order.
    pub fn assemble(
        matrix: &DecisionMatrix,
        weights: &Weights,
        scores: &Scores,
        ranking: &[RankedAlternative],
        options: RunOptions,
    ) -> DecisionResult {
        let rank = options.rank.then(|| {
            ranking
                .iter()
                .map(|r| RankEntry(r.option.clone(), r.score))
                .collect()
        });

        let contribution = options.wants_contribution().then(|| ContributionReport {
            criteria_weights: weights.entries().iter().cloned().collect(),
            alternatives_contribution: AlternativesContribution {
                by_criteria: options
                    .contribution_detailed
                    .then(|| Self::by_criteria(matrix, scores)),
                total_percentage: options
                    .contribution_global
                    .then(|| Self::total_percentage(matrix, scores)),
            },
        });

        DecisionResult { rank, contribution }
    }

    fn by_criteria(
        matrix: &DecisionMatrix,
        scores: &Scores,
    ) -> IndexMap<OptionName, IndexMap<CriterionName, f64>> {
        matrix
            .alternatives()
            .iter()
            .enumerate()
            .map(|(row, option)| {
                let cells = matrix
                    .criteria()
                    .iter()
                    .zip(scores.weighted_row(row))
                    .map(|((criterion, _), weighted)| (criterion.clone(), *weighted))
                    .collect();
                (option.clone(), cells)
            })
            .collect()
    }

    fn total_percentage(matrix: &DecisionMatrix, scores: &Scores) -> IndexMap<OptionName, f64> {
        matrix
            .alternatives()
            .iter()
            .cloned()
            .zip(scores.percentages().iter().copied())
            .collect()
    }
}
