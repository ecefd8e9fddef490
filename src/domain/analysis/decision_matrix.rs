//! Decision Matrix - Validated, immutable snapshot of the registries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionName, DecisionError, Direction, OptionName};
use crate::domain::registry::{CriteriaRegistry, OptionRegistry};

/// Hard bounds on dataset size, checked before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetLimits {
    pub max_criteria: usize,
    pub max_options: usize,
}

impl DatasetLimits {
    pub const DEFAULT_MAX: usize = 1024;

    /// Creates limits with explicit bounds.
    pub fn new(max_criteria: usize, max_options: usize) -> Self {
        Self {
            max_criteria,
            max_options,
        }
    }

    fn check(&self, criteria: usize, options: usize) -> Result<(), DecisionError> {
        if criteria > self.max_criteria {
            return Err(DecisionError::DatasetTooLarge {
                kind: "criteria",
                count: criteria,
                limit: self.max_criteria,
            });
        }
        if options > self.max_options {
            return Err(DecisionError::DatasetTooLarge {
                kind: "options",
                count: options,
                limit: self.max_options,
            });
        }
        Ok(())
    }
}

impl Default for DatasetLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX, Self::DEFAULT_MAX)
    }
}

/// Criteria x alternatives matrix of raw values.
///
/// Rows follow option registration order, columns follow criterion
/// registration order. Every cell is present and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    criteria: Vec<(CriterionName, Direction)>,
    alternatives: Vec<OptionName>,
    /// `values[row][column]`
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Snapshots the registries, failing fast on the first gap.
    ///
    /// # Errors
    /// - `DatasetTooLarge` if either dimension exceeds `limits`
    /// - `EmptyDataset` if there are no criteria or no options
    /// - `IncompleteOption` naming the first option (registration order)
    ///   and its first missing criterion
    pub fn from_registries(
        criteria: &CriteriaRegistry,
        options: &OptionRegistry,
        limits: &DatasetLimits,
    ) -> Result<Self, DecisionError> {
        limits.check(criteria.len(), options.len())?;

        if criteria.is_empty() || options.is_empty() {
            return Err(DecisionError::EmptyDataset {
                criteria: criteria.len(),
                options: options.len(),
            });
        }

        let columns: Vec<(CriterionName, Direction)> = criteria
            .iter()
            .map(|(name, direction)| (name.clone(), direction))
            .collect();

        let mut alternatives = Vec::with_capacity(options.len());
        let mut values = Vec::with_capacity(options.len());

        for alternative in options.iter() {
            let mut row = Vec::with_capacity(columns.len());
            for (criterion, _) in &columns {
                let value = alternative.value(criterion.as_str()).ok_or_else(|| {
                    DecisionError::incomplete_option(alternative.name.as_str(), criterion.as_str())
                })?;
                row.push(value);
            }
            alternatives.push(alternative.name.clone());
            values.push(row);
        }

        Ok(Self {
            criteria: columns,
            alternatives,
            values,
        })
    }

    /// Creates a builder for constructing a matrix directly.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::default()
    }

    /// Criteria with their directions, in column order.
    pub fn criteria(&self) -> &[(CriterionName, Direction)] {
        &self.criteria
    }

    /// Alternatives in row order.
    pub fn alternatives(&self) -> &[OptionName] {
        &self.alternatives
    }

    /// Raw value for a row and column.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// All raw values of one column, in row order.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.values
            .iter()
            .filter_map(|row| row.get(column).copied())
            .collect()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

/// Builder that goes through the registries, so it enforces the same
/// validation as a dataset.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<(String, Direction)>,
    alternatives: Vec<(String, Vec<f64>)>,
    limits: DatasetLimits,
}

impl DecisionMatrixBuilder {
    /// Adds a criterion column.
    pub fn criterion(mut self, name: impl Into<String>, direction: Direction) -> Self {
        self.criteria.push((name.into(), direction));
        self
    }

    /// Adds an alternative row; values are matched to criteria positionally.
    pub fn alternative(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push((name.into(), values));
        self
    }

    /// Overrides the size limits.
    pub fn limits(mut self, limits: DatasetLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builds the matrix.
    pub fn build(self) -> Result<DecisionMatrix, DecisionError> {
        let mut criteria = CriteriaRegistry::new();
        criteria.set_criteria(
            self.criteria
                .iter()
                .map(|(name, direction)| (name.clone(), direction.as_str())),
        )?;

        let mut options = OptionRegistry::new();
        for (name, row) in self.alternatives {
            let values: Vec<(String, f64)> = self
                .criteria
                .iter()
                .map(|(criterion, _)| criterion.clone())
                .zip(row)
                .collect();
            options.set_option(&criteria, name, values)?;
        }

        DecisionMatrix::from_registries(&criteria, &options, &self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> (CriteriaRegistry, OptionRegistry) {
        let mut criteria = CriteriaRegistry::new();
        criteria.set_criteria([("cost", "min"), ("quality", "max")]).unwrap();
        let mut options = OptionRegistry::new();
        options
            .set_option(&criteria, "X", [("cost", 10.0), ("quality", 5.0)])
            .unwrap();
        options
            .set_option(&criteria, "Y", [("quality", 10.0), ("cost", 20.0)])
            .unwrap();
        (criteria, options)
    }

    #[test]
    fn snapshot_orders_rows_and_columns_by_registration() {
        let (criteria, options) = registries();
        let matrix =
            DecisionMatrix::from_registries(&criteria, &options, &DatasetLimits::default())
                .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.value(1, 0), Some(20.0));
        assert_eq!(matrix.value(1, 1), Some(10.0));
        assert_eq!(matrix.column(0), vec![10.0, 20.0]);
        assert_eq!(matrix.criteria()[0].1, Direction::Min);
    }

    #[test]
    fn snapshot_rejects_empty_criteria() {
        let criteria = CriteriaRegistry::new();
        let options = OptionRegistry::new();

        let result =
            DecisionMatrix::from_registries(&criteria, &options, &DatasetLimits::default());

        assert_eq!(
            result,
            Err(DecisionError::EmptyDataset {
                criteria: 0,
                options: 0
            })
        );
    }

    #[test]
    fn snapshot_rejects_empty_options() {
        let (criteria, _) = registries();
        let result = DecisionMatrix::from_registries(
            &criteria,
            &OptionRegistry::new(),
            &DatasetLimits::default(),
        );

        assert!(matches!(
            result,
            Err(DecisionError::EmptyDataset { criteria: 2, options: 0 })
        ));
    }

    #[test]
    fn snapshot_reports_first_missing_value() {
        let (mut criteria, options) = registries();
        criteria.set_criteria([("speed", "max")]).unwrap();

        let result =
            DecisionMatrix::from_registries(&criteria, &options, &DatasetLimits::default());

        assert_eq!(result, Err(DecisionError::incomplete_option("X", "speed")));
    }

    #[test]
    fn snapshot_enforces_limits() {
        let (criteria, options) = registries();
        let result =
            DecisionMatrix::from_registries(&criteria, &options, &DatasetLimits::new(8, 1));

        assert_eq!(
            result,
            Err(DecisionError::DatasetTooLarge {
                kind: "options",
                count: 2,
                limit: 1
            })
        );
    }

    #[test]
    fn builder_matches_values_positionally() {
        let matrix = DecisionMatrix::builder()
            .criterion("speed", Direction::Max)
            .criterion("price", Direction::Min)
            .alternative("Z", vec![42.0, 3.0])
            .build()
            .unwrap();

        assert_eq!(matrix.value(0, 0), Some(42.0));
        assert_eq!(matrix.value(0, 1), Some(3.0));
        assert_eq!(matrix.value(1, 0), None);
    }

    #[test]
    fn builder_short_row_is_incomplete() {
        let result = DecisionMatrix::builder()
            .criterion("speed", Direction::Max)
            .criterion("price", Direction::Min)
            .alternative("Z", vec![42.0])
            .build();

        assert_eq!(result, Err(DecisionError::incomplete_option("Z", "price")));
    }
}
