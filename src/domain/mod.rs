//! Domain layer containing the decision engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (names, direction, errors)
//! - `registry` - Criteria and option registries
//! - `analysis` - Pure scoring stages (normalize, weight, score, rank, assemble)
//! - `dataset` - Session object exposing the engine API
//! - `document` - Declarative dataset description

pub mod analysis;
pub mod foundation;
pub mod registry;

mod dataset;
mod document;

pub use dataset::{Dataset, Evaluation};
pub use document::{DecisionDocument, DocumentEnvelope, DocumentError, OptionValues};
