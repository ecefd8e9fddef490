//! Registry Module - Mutable criteria and option state.
//!
//! Registries are only ever mutated through their setters. A run reads them
//! through a [`DecisionMatrix`](crate::domain::analysis::DecisionMatrix)
//! snapshot and never writes back.

mod criteria;
mod options;

pub use criteria::CriteriaRegistry;
pub use options::{Alternative, OptionRegistry};
