//! Output configuration

use serde::Deserialize;

use crate::domain::analysis::RunOptions;

/// Sections produced by a run unless the caller overrides them
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Ordered ranking of options
    #[serde(default = "default_enabled")]
    pub rank: bool,

    /// Per-option share of the total score
    #[serde(default = "default_enabled")]
    pub contribution_global: bool,

    /// Per-option, per-criterion weighted contributions
    #[serde(default = "default_enabled")]
    pub contribution_detailed: bool,
}

fn default_enabled() -> bool {
    true
}

impl OutputConfig {
    pub fn run_options(&self) -> RunOptions {
        RunOptions::none()
            .with_rank(self.rank)
            .with_contribution_global(self.contribution_global)
            .with_contribution_detailed(self.contribution_detailed)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            rank: true,
            contribution_global: true,
            contribution_detailed: true,
        }
    }
}
