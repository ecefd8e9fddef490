//! Option Registry - Alternatives and their raw per-criterion values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::CriteriaRegistry;
use crate::domain::foundation::{CriterionName, DecisionError, OptionName, ValidationError};

/// An alternative with its raw value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: OptionName,
    pub values: HashMap<CriterionName, f64>,
}

impl Alternative {
    /// Returns the raw value for a criterion, if supplied.
    pub fn value(&self, criterion: &str) -> Option<f64> {
        self.values.get(criterion).copied()
    }

    /// Returns the first registered criterion this alternative has no value for.
    pub fn first_missing<'a>(&self, criteria: &'a CriteriaRegistry) -> Option<&'a CriterionName> {
        criteria
            .list_criteria()
            .iter()
            .find(|name| !self.values.contains_key(name.as_str()))
    }
}

/// Holds the registered alternatives in insertion order.
///
/// Referential integrity against the criteria is checked on write; completeness
/// (a value for every criterion) is only checked when a run snapshots the data,
/// so criteria may be added after options as long as the gaps are filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionRegistry {
    order: Vec<OptionName>,
    alternatives: HashMap<OptionName, Alternative>,
}

impl OptionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites an option.
    ///
    /// Fails with `UnknownCriterion` if any key is not a registered criterion,
    /// and with a validation error for an empty name or a non-finite value.
    /// The registry is unchanged on failure.
    pub fn set_option<N, I, K>(
        &mut self,
        criteria: &CriteriaRegistry,
        name: N,
        values: I,
    ) -> Result<(), DecisionError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let name = OptionName::new(name)?;

        let mut checked = HashMap::new();
        for (criterion, value) in values {
            let criterion = criterion.into();
            if !criteria.contains(&criterion) {
                return Err(DecisionError::unknown_criterion(name.as_str(), criterion));
            }
            if !value.is_finite() {
                return Err(ValidationError::non_finite(criterion, value).into());
            }
            checked.insert(CriterionName::new(criterion)?, value);
        }

        let alternative = Alternative {
            name: name.clone(),
            values: checked,
        };

        match self.alternatives.insert(name.clone(), alternative) {
            Some(_) => debug!(option = %name, "Option overwritten"),
            None => {
                debug!(option = %name, "Option registered");
                self.order.push(name);
            }
        }
        Ok(())
    }

    /// Returns an option by name.
    pub fn get_option(&self, name: &str) -> Option<&Alternative> {
        self.alternatives.get(name)
    }

    /// Returns option names in registration order.
    pub fn list_options(&self) -> &[OptionName] {
        &self.order
    }

    /// Iterates alternatives in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Alternative> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.alternatives.get(name))
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no options are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
