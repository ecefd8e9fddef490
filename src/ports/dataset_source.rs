//! Dataset Source Port - Where decision documents come from.
//!
//! The engine itself performs no I/O. A source reads and parses a
//! [`DecisionDocument`]; applying it to a [`Dataset`] goes through the
//! ordinary registry setters.

use thiserror::Error;

use crate::domain::{Dataset, DecisionDocument, DocumentError};

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error reading '{location}': {message}")]
    Io { location: String, message: String },

    #[error("Failed to parse '{location}': {message}")]
    Parse { location: String, message: String },

    #[error("Unsupported document format '{0}'")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Port for reading decision documents.
///
/// # Contract
///
/// Implementations must:
/// - Return the document exactly as declared (criteria order preserved)
/// - Report unreadable or malformed input as `SourceError`, never panic
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;

    /// Reads and parses the document.
    fn load_document(&self) -> Result<DecisionDocument, SourceError>;

    /// Reads the document and builds a fresh dataset from it.
    fn load_dataset(&self) -> Result<Dataset, SourceError> {
        Ok(self.load_document()?.into_dataset()?)
    }
}
