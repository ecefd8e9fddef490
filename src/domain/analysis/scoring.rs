//! Scoring Engine - Weighted contributions, totals and score shares.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, NormalizedMatrix, Weights};
use crate::domain::foundation::{CriterionName, DecisionError, OptionName};

/// What one alternative earns from one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub option: OptionName,
    pub criterion: CriterionName,
    pub normalized: f64,
    /// `normalized * weight(criterion)`
    pub weighted: f64,
}

/// Scores for every alternative, rows in matrix order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    /// `weighted[row][column]`
    weighted: Vec<Vec<f64>>,
    totals: Vec<f64>,
    percentages: Vec<f64>,
}

impl Scores {
    /// Weighted contribution for a row and column.
    pub fn weighted(&self, row: usize, column: usize) -> Option<f64> {
        self.weighted.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Weighted contributions of one row.
    pub fn weighted_row(&self, row: usize) -> &[f64] {
        self.weighted.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total score of a row, in `[0, 1]`.
    pub fn total(&self, row: usize) -> Option<f64> {
        self.totals.get(row).copied()
    }

    /// Totals in row order.
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Share of the total score mass of a row, in percent.
    pub fn percentage(&self, row: usize) -> Option<f64> {
        self.percentages.get(row).copied()
    }

    /// Percentages in row order.
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }
}

/// Combines normalized values and weights.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes weighted contributions, totals and percentages.
    ///
    /// # Algorithm
    /// - `weighted(o, c) = normalized(o, c) * weight(c)`
    /// - `total(o) = Σ_c weighted(o, c)`, clamped to `[0, 1]` against rounding
    /// - `pct(o) = total(o) / Σ_o' total(o') * 100`
    ///
    /// # Errors
    /// - `EmptyDataset` if the total score mass is zero (no rows or no columns)
    pub fn score(
        matrix: &DecisionMatrix,
        normalized: &NormalizedMatrix,
        weights: &Weights,
    ) -> Result<Scores, DecisionError> {
        let columns = matrix.criterion_count();
        let mut weighted = Vec::with_capacity(matrix.alternative_count());
        let mut totals = Vec::with_capacity(matrix.alternative_count());

        for row in 0..matrix.alternative_count() {
            let cells: Vec<f64> = normalized
                .row(row)
                .iter()
                .take(columns)
                .enumerate()
                .map(|(column, n)| n * weights.get(column).unwrap_or(0.0))
                .collect();
            let total: f64 = cells.iter().sum();
            totals.push(total.clamp(0.0, 1.0));
            weighted.push(cells);
        }

        let mass: f64 = totals.iter().sum();
        if mass <= 0.0 || !mass.is_finite() {
            return Err(DecisionError::EmptyDataset {
                criteria: columns,
                options: matrix.alternative_count(),
            });
        }

        let percentages = totals.iter().map(|t| t / mass * 100.0).collect();

        Ok(Scores {
            weighted,
            totals,
            percentages,
        })
    }

    /// Flattens scores into per-cell contribution records, row-major.
    pub fn contributions(
        matrix: &DecisionMatrix,
        normalized: &NormalizedMatrix,
        scores: &Scores,
    ) -> Vec<Contribution> {
        let mut records = Vec::with_capacity(matrix.alternative_count() * matrix.criterion_count());
        for (row, option) in matrix.alternatives().iter().enumerate() {
            for (column, (criterion, _)) in matrix.criteria().iter().enumerate() {
                records.push(Contribution {
                    option: option.clone(),
                    criterion: criterion.clone(),
                    normalized: normalized.value(row, column).unwrap_or(0.0),
                    weighted: scores.weighted(row, column).unwrap_or(0.0),
                });
            }
        }
        records
    }
}
