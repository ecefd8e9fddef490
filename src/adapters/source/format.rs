//! Document formats and their parsers.

use std::path::Path;

use crate::domain::{DecisionDocument, DocumentEnvelope};
use crate::ports::SourceError;

/// Serialization format of a decision document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(SourceError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Parses a document, accepting both wrapped and bare layouts.
    ///
    /// The layout is decided from the top-level keys before the document is
    /// deserialized, so errors name the offending value and its position.
    pub fn parse(&self, content: &str, location: &str) -> Result<DecisionDocument, SourceError> {
        let parse_error = |message: String| SourceError::Parse {
            location: location.to_string(),
            message,
        };

        match self {
            DocumentFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
                let document = if value.get(DocumentEnvelope::KEY).is_some() {
                    serde_json::from_str::<DocumentEnvelope>(content).map(DecisionDocument::from)
                } else {
                    serde_json::from_str::<DecisionDocument>(content)
                };
                document.map_err(|e| parse_error(e.to_string()))
            }
            DocumentFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
                let document = if value.get(DocumentEnvelope::KEY).is_some() {
                    serde_yaml::from_str::<DocumentEnvelope>(content).map(DecisionDocument::from)
                } else {
                    serde_yaml::from_str::<DecisionDocument>(content)
                };
                document.map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}
