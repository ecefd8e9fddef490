//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failures reported by registry setters and by [`Dataset::run`](crate::domain::Dataset::run).
///
/// Every failure is deterministic for a given registry state. A failing call
/// never leaves a partially mutated registry or a partial result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error("Invalid direction '{token}' for criterion '{criterion}': expected 'min' or 'max'")]
    InvalidDirection { criterion: String, token: String },

    #[error("Option '{option}' references unknown criterion '{criterion}'")]
    UnknownCriterion { option: String, criterion: String },

    #[error("Option '{option}' has no value for criterion '{criterion}'")]
    IncompleteOption { option: String, criterion: String },

    #[error("Dataset is empty: {criteria} criteria, {options} options")]
    EmptyDataset { criteria: usize, options: usize },

    #[error("Dataset has {count} {kind}, limit is {limit}")]
    DatasetTooLarge {
        kind: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("Weight strategy '{strategy}' produced invalid weights: {reason}")]
    InvalidWeights { strategy: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DecisionError {
    /// Creates an invalid direction error.
    pub fn invalid_direction(criterion: impl Into<String>, token: impl Into<String>) -> Self {
        DecisionError::InvalidDirection {
            criterion: criterion.into(),
            token: token.into(),
        }
    }

    /// Creates an unknown criterion error.
    pub fn unknown_criterion(option: impl Into<String>, criterion: impl Into<String>) -> Self {
        DecisionError::UnknownCriterion {
            option: option.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates an incomplete option error.
    pub fn incomplete_option(option: impl Into<String>, criterion: impl Into<String>) -> Self {
        DecisionError::IncompleteOption {
            option: option.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates an invalid weights error.
    pub fn invalid_weights(strategy: impl Into<String>, reason: impl Into<String>) -> Self {
        DecisionError::InvalidWeights {
            strategy: strategy.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::InvalidDirection { .. } => ErrorCode::InvalidDirection,
            DecisionError::UnknownCriterion { .. } => ErrorCode::UnknownCriterion,
            DecisionError::IncompleteOption { .. } => ErrorCode::IncompleteOption,
            DecisionError::EmptyDataset { .. } => ErrorCode::EmptyDataset,
            DecisionError::DatasetTooLarge { .. } => ErrorCode::DatasetTooLarge,
            DecisionError::InvalidWeights { .. } => ErrorCode::InvalidWeights,
            DecisionError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Registry errors
    InvalidDirection,
    UnknownCriterion,
    ValidationFailed,

    // Run-time errors
    IncompleteOption,
    EmptyDataset,
    DatasetTooLarge,
    InvalidWeights,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidDirection => "INVALID_DIRECTION",
            ErrorCode::UnknownCriterion => "UNKNOWN_CRITERION",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::IncompleteOption => "INCOMPLETE_OPTION",
            ErrorCode::EmptyDataset => "EMPTY_DATASET",
            ErrorCode::DatasetTooLarge => "DATASET_TOO_LARGE",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
        };
        write!(f, "{}", s)
    }
}
