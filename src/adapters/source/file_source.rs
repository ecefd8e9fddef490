//! File-based Dataset Source Adapter
//!
//! Reads a decision document from a `.json`, `.yaml` or `.yml` file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::DocumentFormat;
use crate::domain::DecisionDocument;
use crate::ports::{DatasetSource, SourceError};

/// Dataset source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given path. Nothing is read until load.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_document(&self) -> Result<DecisionDocument, SourceError> {
        let format = DocumentFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            location: self.location(),
            message: e.to_string(),
        })?;

        debug!(
            path = %self.path.display(),
            bytes = content.len(),
            ?format,
            "Read decision document"
        );
        format.parse(&content, &self.location())
    }
}
