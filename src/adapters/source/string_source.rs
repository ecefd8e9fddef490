//! In-memory Dataset Source Adapter

use super::DocumentFormat;
use crate::domain::DecisionDocument;
use crate::ports::{DatasetSource, SourceError};

/// Dataset source over a document already held in memory.
#[derive(Debug, Clone)]
pub struct StringSource {
    content: String,
    format: DocumentFormat,
}

impl StringSource {
    /// Creates a source over JSON text.
    pub fn json(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: DocumentFormat::Json,
        }
    }

    /// Creates a source over YAML text.
    pub fn yaml(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format: DocumentFormat::Yaml,
        }
    }
}

impl DatasetSource for StringSource {
    fn location(&self) -> String {
        format!("<inline {:?}>", self.format)
    }

    fn load_document(&self) -> Result<DecisionDocument, SourceError> {
        self.format.parse(&self.content, &self.location())
    }
}
