//! SharedDataset - A dataset shared between threads.
//!
//! Writers take the write lock, so a run never observes a half-applied
//! update. Runs hold the read lock for the whole computation and may
//! proceed concurrently with each other.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::analysis::{DecisionResult, RunOptions};
use crate::domain::foundation::{DecisionError, Direction};
use crate::domain::registry::Alternative;
use crate::domain::Dataset;

/// Cloneable handle to a dataset behind a read-write lock.
#[derive(Debug, Clone, Default)]
pub struct SharedDataset {
    inner: Arc<RwLock<Dataset>>,
}

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dataset)),
        }
    }

    // A panicking batch only touches its staged copy and setters validate
    // before mutating, so a poisoned lock still guards a consistent dataset.
    fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Dataset> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_criteria<I, N, D>(&self, criteria: I) -> Result<(), DecisionError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: AsRef<str>,
    {
        self.write().set_criteria(criteria)
    }

    pub fn get_criteria(&self, name: &str) -> Option<Direction> {
        self.read().get_criteria(name)
    }

    pub fn list_criteria(&self) -> Vec<String> {
        self.read().list_criteria().iter().map(|n| n.to_string()).collect()
    }

    pub fn set_option<N, I, K>(&self, name: N, values: I) -> Result<(), DecisionError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.write().set_option(name, values)
    }

    pub fn get_option(&self, name: &str) -> Option<Alternative> {
        self.read().get_option(name).cloned()
    }

    pub fn list_options(&self) -> Vec<String> {
        self.read().list_options().iter().map(|n| n.to_string()).collect()
    }

    /// Runs the engine against a consistent view of the dataset.
    pub fn run(&self, options: RunOptions) -> Result<DecisionResult, DecisionError> {
        self.read().run(options)
    }

    /// Independent copy of the current dataset.
    pub fn snapshot(&self) -> Dataset {
        self.read().clone()
    }

    /// Applies several changes as one unit under the write lock.
    ///
    /// The batch runs against a copy of the dataset, which replaces the
    /// shared one only if the batch returns `Ok`.
    pub fn update<F, T, E>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut Dataset) -> Result<T, E>,
    {
        let mut guard = self.write();
        let mut staged = guard.clone();
        let outcome = change(&mut staged)?;
        *guard = staged;
        Ok(outcome)
    }
}

impl From<Dataset> for SharedDataset {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}
