//! Decision Document - Declarative description of a dataset.
//!
//! ```json
//! {
//!   "data": {
//!     "criteria": {"price": "min", "storage": "max"},
//!     "options": {
//!       "Phone A": [9494, 128],
//!       "Phone B": {"price": 4139, "storage": 256}
//!     }
//!   }
//! }
//! ```
//!
//! The `data` wrapper is optional. Positional value lists follow the order
//! of the document's `criteria` map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::foundation::DecisionError;
use super::Dataset;

/// Errors raised while applying a document to a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("Option '{option}' lists {actual} values for {expected} declared criteria")]
    Arity {
        option: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

/// Raw values of one option in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    expecting = "option values must be a list of numbers or a map of criterion name to number"
)]
pub enum OptionValues {
    /// Values in the order of the document's criteria.
    Positional(Vec<f64>),
    /// Values keyed by criterion name.
    Named(IndexMap<String, f64>),
}

/// Criteria directions and option values as written in a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionDocument {
    /// criterion -> `"min"` | `"max"`
    pub criteria: IndexMap<String, String>,
    /// option -> values
    #[serde(default)]
    pub options: IndexMap<String, OptionValues>,
}

/// The `{"data": {...}}` wrapper around a document.
///
/// Parsers check for the [`DocumentEnvelope::KEY`] member first and then
/// deserialize either this type or a bare [`DecisionDocument`], so field
/// errors keep their own message and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEnvelope {
    pub data: DecisionDocument,
}

impl DocumentEnvelope {
    pub const KEY: &'static str = "data";
}

impl From<DocumentEnvelope> for DecisionDocument {
    fn from(envelope: DocumentEnvelope) -> Self {
        envelope.data
    }
}

impl DecisionDocument {
    /// Registers the document's criteria and options on `dataset`.
    ///
    /// Goes exclusively through the dataset setters, so every registry rule
    /// applies. Stops at the first failing option; options applied before
    /// it stay registered.
    pub fn apply_to(&self, dataset: &mut Dataset) -> Result<(), DocumentError> {
        dataset.set_criteria(
            self.criteria
                .iter()
                .map(|(name, direction)| (name.clone(), direction.as_str())),
        )?;

        for (option, values) in &self.options {
            match values {
                OptionValues::Positional(list) => {
                    if list.len() != self.criteria.len() {
                        return Err(DocumentError::Arity {
                            option: option.clone(),
                            expected: self.criteria.len(),
                            actual: list.len(),
                        });
                    }
                    let pairs: Vec<(String, f64)> =
                        self.criteria.keys().cloned().zip(list.iter().copied()).collect();
                    dataset.set_option(option.clone(), pairs)?;
                }
                OptionValues::Named(map) => {
                    dataset.set_option(
                        option.clone(),
                        map.iter().map(|(criterion, value)| (criterion.clone(), *value)),
                    )?;
                }
            }
        }
        Ok(())
    }

    /// Builds a fresh dataset from the document.
    pub fn into_dataset(self) -> Result<Dataset, DocumentError> {
        let mut dataset = Dataset::new();
        self.apply_to(&mut dataset)?;
        Ok(dataset)
    }

    /// Captures a dataset's registries as a document with named values.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let criteria = dataset
            .criteria()
            .iter()
            .map(|(name, direction)| (name.to_string(), direction.as_str().to_string()))
            .collect();

        let options = dataset
            .options()
            .iter()
            .map(|alternative| {
                let values = dataset
                    .list_criteria()
                    .iter()
                    .filter_map(|criterion| {
                        alternative
                            .value(criterion.as_str())
                            .map(|v| (criterion.to_string(), v))
                    })
                    .collect();
                (alternative.name.to_string(), OptionValues::Named(values))
            })
            .collect();

        Self { criteria, options }
    }
}
