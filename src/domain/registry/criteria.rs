//! Criteria Registry - Ordered set of criteria and their directions.

use std::collections::HashMap;
use tracing::debug;

use crate::domain::foundation::{CriterionName, DecisionError, Direction};

/// Holds the registered criteria in insertion order.
///
/// Re-registering an existing name overwrites its direction but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaRegistry {
    /// Criterion names in registration order.
    order: Vec<CriterionName>,
    /// Direction keyed by criterion name.
    directions: HashMap<CriterionName, Direction>,
}

impl CriteriaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or overwrites each `(name, direction token)` pair.
    ///
    /// The whole batch is validated before anything is written, so a bad
    /// name or token leaves the registry untouched.
    pub fn set_criteria<I, N, D>(&mut self, criteria: I) -> Result<(), DecisionError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (name, token) in criteria {
            let name = name.into();
            let direction = token
                .as_ref()
                .parse::<Direction>()
                .map_err(|_| DecisionError::invalid_direction(name.clone(), token.as_ref()))?;
            parsed.push((CriterionName::new(name)?, direction));
        }

        for (name, direction) in parsed {
            self.insert(name, direction);
        }
        Ok(())
    }

    /// Registers or overwrites a single criterion with an already typed direction.
    pub fn set_criterion(&mut self, name: CriterionName, direction: Direction) {
        self.insert(name, direction);
    }

    fn insert(&mut self, name: CriterionName, direction: Direction) {
        match self.directions.insert(name.clone(), direction) {
            Some(previous) => {
                debug!(criterion = %name, %previous, %direction, "Criterion direction overwritten");
            }
            None => {
                debug!(criterion = %name, %direction, "Criterion registered");
                self.order.push(name);
            }
        }
    }

    /// Returns the direction of a criterion, if registered.
    pub fn get_criteria(&self, name: &str) -> Option<Direction> {
        self.directions.get(name).copied()
    }

    /// Returns true if the criterion is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.directions.contains_key(name)
    }

    /// Returns criterion names in registration order.
    pub fn list_criteria(&self) -> &[CriterionName] {
        &self.order
    }

    /// Iterates `(name, direction)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CriterionName, Direction)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.directions.get(name).map(|d| (name, *d)))
    }

    /// Returns the number of registered criteria.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no criteria are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
