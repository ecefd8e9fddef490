//! Weighting - Pluggable derivation of per-criterion weights.
//!
//! The engine only depends on [`WeightStrategy`]. Equal weighting is the
//! reference policy; entropy and fixed weights are alternative laws that can
//! be swapped in without touching normalization, scoring or ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::{DecisionMatrix, NormalizedMatrix};
use crate::domain::foundation::{CriterionName, DecisionError, ValidationError};

/// Tolerance for the weights-sum-to-one contract.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One weight per criterion, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    entries: Vec<(CriterionName, f64)>,
}

impl Weights {
    /// Wraps raw `(criterion, weight)` pairs without checking them.
    ///
    /// [`Weights::verify`] is what the engine runs before using them.
    pub fn new(entries: Vec<(CriterionName, f64)>) -> Self {
        Self { entries }
    }

    /// Weight of the criterion in `column`.
    pub fn get(&self, column: usize) -> Option<f64> {
        self.entries.get(column).map(|(_, w)| *w)
    }

    /// Weight of a criterion by name.
    pub fn by_name(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == criterion)
            .map(|(_, w)| *w)
    }

    /// `(criterion, weight)` pairs in column order.
    pub fn entries(&self) -> &[(CriterionName, f64)] {
        &self.entries
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Checks the strategy contract against the matrix the weights were derived for.
    ///
    /// One finite, non-negative weight per criterion, same order, summing to
    /// 1 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn verify(&self, strategy: &str, matrix: &DecisionMatrix) -> Result<(), DecisionError> {
        if self.entries.len() != matrix.criterion_count() {
            return Err(DecisionError::invalid_weights(
                strategy,
                format!(
                    "expected {} weights, got {}",
                    matrix.criterion_count(),
                    self.entries.len()
                ),
            ));
        }

        for ((name, weight), (criterion, _)) in self.entries.iter().zip(matrix.criteria()) {
            if name != criterion {
                return Err(DecisionError::invalid_weights(
                    strategy,
                    format!("expected weight for '{}', got '{}'", criterion, name),
                ));
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(DecisionError::invalid_weights(
                    strategy,
                    format!("weight for '{}' is {}", name, weight),
                ));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DecisionError::invalid_weights(
                strategy,
                format!("weights sum to {}", sum),
            ));
        }
        Ok(())
    }
}

/// Derives a weight per criterion.
///
/// Implementations receive the raw snapshot and its normalized form and
/// must return weights in column order that sum to 1.0.
pub trait WeightStrategy: fmt::Debug + Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Computes the weights.
    fn derive_weights(
        &self,
        matrix: &DecisionMatrix,
        normalized: &NormalizedMatrix,
    ) -> Result<Weights, DecisionError>;
}

/// `weight(c) = 1 / |criteria|`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualWeights;

impl EqualWeights {
    fn for_matrix(matrix: &DecisionMatrix) -> Weights {
        let share = 1.0 / matrix.criterion_count().max(1) as f64;
        Weights::new(
            matrix
                .criteria()
                .iter()
                .map(|(name, _)| (name.clone(), share))
                .collect(),
        )
    }
}

impl WeightStrategy for EqualWeights {
    fn name(&self) -> &'static str {
        "equal"
    }

    fn derive_weights(
        &self,
        matrix: &DecisionMatrix,
        _normalized: &NormalizedMatrix,
    ) -> Result<Weights, DecisionError> {
        Ok(Self::for_matrix(matrix))
    }
}

/// Shannon-entropy objective weighting.
///
/// Criteria whose normalized scores are spread unevenly across alternatives
/// carry more information and receive more weight. A criterion on which all
/// alternatives tie has maximal entropy and weight zero.
///
/// # Edge Cases
/// - Single alternative, or every criterion non-discriminating: equal weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyWeights;

impl WeightStrategy for EntropyWeights {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn derive_weights(
        &self,
        matrix: &DecisionMatrix,
        normalized: &NormalizedMatrix,
    ) -> Result<Weights, DecisionError> {
        let rows = matrix.alternative_count();
        if rows < 2 {
            return Ok(EqualWeights::for_matrix(matrix));
        }

        let k = 1.0 / (rows as f64).ln();

        let divergences: Vec<f64> = (0..matrix.criterion_count())
            .map(|column| {
                let cells = normalized.column(column);
                let total: f64 = cells.iter().sum();
                if total <= 0.0 {
                    return 0.0;
                }
                let entropy: f64 = cells
                    .iter()
                    .map(|x| x / total)
                    .filter(|p| *p > 0.0)
                    .map(|p| -p * p.ln())
                    .sum::<f64>()
                    * k;
                (1.0 - entropy).max(0.0)
            })
            .collect();

        let spread: f64 = divergences.iter().sum();
        if spread <= f64::EPSILON {
            return Ok(EqualWeights::for_matrix(matrix));
        }

        Ok(Weights::new(
            matrix
                .criteria()
                .iter()
                .zip(divergences)
                .map(|((name, _), d)| (name.clone(), d / spread))
                .collect(),
        ))
    }
}

/// Caller-supplied importance per criterion, renormalized to sum to 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedWeights {
    raw: HashMap<CriterionName, f64>,
}

impl FixedWeights {
    /// Creates fixed weights from `(criterion, importance)` pairs.
    ///
    /// Importances must be finite and non-negative; they need not sum to 1.
    pub fn new<I, K>(weights: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut raw = HashMap::new();
        for (criterion, value) in weights {
            let criterion = CriterionName::new(criterion)?;
            if !value.is_finite() {
                return Err(ValidationError::non_finite(criterion.as_str(), value));
            }
            if value < 0.0 {
                return Err(ValidationError::invalid_format(
                    criterion.as_str(),
                    "weight cannot be negative",
                ));
            }
            raw.insert(criterion, value);
        }
        Ok(Self { raw })
    }
}

impl WeightStrategy for FixedWeights {
    fn name(&self) -> &'static str {
        "fixed"
    }

    /// # Errors
    /// - `InvalidWeights` if a criterion has no weight or all weights are zero
    fn derive_weights(
        &self,
        matrix: &DecisionMatrix,
        _normalized: &NormalizedMatrix,
    ) -> Result<Weights, DecisionError> {
        let mut picked = Vec::with_capacity(matrix.criterion_count());
        for (criterion, _) in matrix.criteria() {
            let weight = self.raw.get(criterion).copied().ok_or_else(|| {
                DecisionError::invalid_weights(
                    self.name(),
                    format!("no weight for criterion '{}'", criterion),
                )
            })?;
            picked.push((criterion.clone(), weight));
        }

        let total: f64 = picked.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(DecisionError::invalid_weights(self.name(), "weights sum to zero"));
        }

        Ok(Weights::new(
            picked
                .into_iter()
                .map(|(name, w)| (name, w / total))
                .collect(),
        ))
    }
}

/// Built-in strategies selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingMethod {
    #[default]
    Equal,
    Entropy,
}

impl WeightingMethod {
    /// Returns the strategy implementing this method.
    pub fn strategy(&self) -> Box<dyn WeightStrategy> {
        match self {
            WeightingMethod::Equal => Box::new(EqualWeights),
            WeightingMethod::Entropy => Box::new(EntropyWeights),
        }
    }
}

impl FromStr for WeightingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" => Ok(WeightingMethod::Equal),
            "entropy" => Ok(WeightingMethod::Entropy),
            other => Err(ValidationError::invalid_format(
                "weighting",
                format!("expected 'equal' or 'entropy', got '{}'", other),
            )),
        }
    }
}
