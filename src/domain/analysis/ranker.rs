//! Ranker - Deterministic ordering of alternatives by total score.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, Scores};
use crate::domain::foundation::OptionName;

/// An alternative with its 1-based rank position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub position: usize,
    pub option: OptionName,
    pub score: f64,
}

/// Orders alternatives by total score.
pub struct Ranker;

impl Ranker {
    /// Sorts alternatives by total score, descending.
    ///
    /// Equal totals keep registration order (the sort is stable), so the
    /// first-registered alternative wins the higher rank. Positions are
    /// contiguous from 1 with no shared ranks.
    pub fn rank(matrix: &DecisionMatrix, scores: &Scores) -> Vec<RankedAlternative> {
        let mut order: Vec<(usize, f64)> = scores.totals().iter().copied().enumerate().collect();
        order.sort_by(|a, b| b.1.total_cmp(&a.1));

        order
            .into_iter()
            .enumerate()
            .filter_map(|(i, (row, score))| {
                matrix.alternatives().get(row).map(|option| RankedAlternative {
                    position: i + 1,
                    option: option.clone(),
                    score,
                })
            })
            .collect()
    }

    /// Returns the top-ranked alternative.
    pub fn winner(ranking: &[RankedAlternative]) -> Option<&RankedAlternative> {
        ranking.first()
    }
}
