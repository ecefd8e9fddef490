//! Normalizer - Direction-aware min-max scaling of raw values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DecisionMatrix;
use crate::domain::foundation::Direction;

/// Observed range of one criterion across all alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionRange {
    pub min: f64,
    pub max: f64,
}

impl CriterionRange {
    /// Computes the range of a column. Returns `None` for an empty column.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let range = rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |acc, v| Self {
                min: acc.min.min(*v),
                max: acc.max.max(*v),
            },
        );
        Some(range)
    }

    /// True when every alternative has the same raw value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Normalized scores, same shape as the source [`DecisionMatrix`].
///
/// Every cell lies in `[0, 1]` and `1.0` marks the best alternative on
/// that criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix {
    ranges: Vec<CriterionRange>,
    /// `values[row][column]`
    values: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// Normalized value for a row and column.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Normalized values of one row.
    pub fn row(&self, row: usize) -> &[f64] {
        self.values.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalized values of one column, in row order.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.values
            .iter()
            .filter_map(|row| row.get(column).copied())
            .collect()
    }

    /// Raw range of each criterion, in column order.
    pub fn ranges(&self) -> &[CriterionRange] {
        &self.ranges
    }

    /// Columns whose raw values are all equal.
    pub fn degenerate_columns(&self) -> Vec<usize> {
        self.ranges
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_degenerate())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}

/// Linear min-max normalization.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every column of the matrix.
    ///
    /// # Algorithm
    /// - MAX: `(v - min) / (max - min)`
    /// - MIN: `(max - v) / (max - min)`
    ///
    /// # Edge Cases
    /// - Degenerate column (`max == min`, including a single alternative):
    ///   every cell is `1.0`
    pub fn normalize(matrix: &DecisionMatrix) -> NormalizedMatrix {
        let rows = matrix.alternative_count();
        let mut values = vec![Vec::with_capacity(matrix.criterion_count()); rows];
        let mut ranges = Vec::with_capacity(matrix.criterion_count());

        for (column, (criterion, direction)) in matrix.criteria().iter().enumerate() {
            let raw = matrix.column(column);
            let range = CriterionRange::of(&raw).unwrap_or(CriterionRange { min: 0.0, max: 0.0 });

            if range.is_degenerate() {
                debug!(
                    criterion = %criterion,
                    value = range.min,
                    "Criterion cannot discriminate, all alternatives score 1.0"
                );
            }

            for (row, value) in raw.into_iter().enumerate() {
                if let Some(cells) = values.get_mut(row) {
                    cells.push(Self::scale(value, range, *direction));
                }
            }
            ranges.push(range);
        }

        NormalizedMatrix { ranges, values }
    }

    /// Scales a single raw value into `[0, 1]`.
    pub fn scale(value: f64, range: CriterionRange, direction: Direction) -> f64 {
        if range.is_degenerate() {
            return 1.0;
        }

        let (numerator, span) = match direction {
            Direction::Max => (value - range.min, range.max - range.min),
            Direction::Min => (range.max - value, range.max - range.min),
        };

        // Finite inputs can still overflow the span near f64::MAX; halve first.
        let scaled = if span.is_finite() && numerator.is_finite() {
            numerator / span
        } else {
            let half = |x: f64| x / 2.0;
            let half_span = half(range.max) - half(range.min);
            match direction {
                Direction::Max => (half(value) - half(range.min)) / half_span,
                Direction::Min => (half(range.max) - half(value)) / half_span,
            }
        };

        scaled.clamp(0.0, 1.0)
    }
}
