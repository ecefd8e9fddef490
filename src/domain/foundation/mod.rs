//! Foundation module - Shared domain primitives.
//!
//! Contains the validated names, the direction enum and the error types
//! that form the vocabulary of the decision engine.

mod direction;
mod errors;
mod names;

pub use direction::Direction;
pub use errors::{DecisionError, ErrorCode, ValidationError};
pub use names::{CriterionName, OptionName};
