//! Dataset size limits configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DatasetLimits;

/// Upper bounds on the size of a dataset accepted by a run
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Maximum number of registered criteria
    #[serde(default = "default_max")]
    pub max_criteria: usize,

    /// Maximum number of registered options
    #[serde(default = "default_max")]
    pub max_options: usize,
}

fn default_max() -> usize {
    DatasetLimits::DEFAULT_MAX
}

impl LimitsConfig {
    pub fn dataset_limits(&self) -> DatasetLimits {
        DatasetLimits::new(self.max_criteria, self.max_options)
    }

    /// Validate limits configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_criteria == 0 {
            return Err(ValidationError::ZeroLimit("max_criteria"));
        }
        if self.max_options == 0 {
            return Err(ValidationError::ZeroLimit("max_options"));
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_criteria: default_max(),
            max_options: default_max(),
        }
    }
}
