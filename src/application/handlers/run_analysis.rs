//! RunAnalysisHandler - Loads a dataset from a source and runs the engine.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::analysis::{DatasetLimits, DecisionResult, RunOptions, WeightingMethod};
use crate::domain::foundation::DecisionError;
use crate::ports::{DatasetSource, SourceError};

/// Command to analyse one dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunAnalysisCommand {
    pub options: RunOptions,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub result: DecisionResult,
    pub strategy: &'static str,
    pub criteria: usize,
    pub options: usize,
}

/// Errors returned by [`RunAnalysisHandler`].
#[derive(Debug, Error)]
pub enum RunAnalysisError {
    #[error("failed to load dataset: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

/// Handler running the engine over a dataset source.
pub struct RunAnalysisHandler {
    source: Arc<dyn DatasetSource>,
    weighting: WeightingMethod,
    limits: DatasetLimits,
}

impl RunAnalysisHandler {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            weighting: WeightingMethod::default(),
            limits: DatasetLimits::default(),
        }
    }

    pub fn with_weighting(mut self, weighting: WeightingMethod) -> Self {
        self.weighting = weighting;
        self
    }

    pub fn with_limits(mut self, limits: DatasetLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<RunAnalysisResult, RunAnalysisError> {
        let location = self.source.location();

        // 1. Load and apply settings
        let mut dataset = self
            .source
            .load_dataset()
            .map_err(|e| {
                warn!(source = %location, error = %e, "Dataset could not be loaded");
                e
            })?
            .with_limits(self.limits);
        dataset.set_weight_strategy(Arc::from(self.weighting.strategy()));

        // 2. Run
        let result = dataset.run(cmd.options).map_err(|e| {
            warn!(source = %location, code = %e.code(), error = %e, "Analysis failed");
            e
        })?;

        let criteria = dataset.list_criteria().len();
        let options = dataset.list_options().len();
        info!(
            source = %location,
            strategy = dataset.weight_strategy(),
            criteria,
            options,
            winner = result.winner().map(|o| o.as_str()).unwrap_or("-"),
            "Analysis completed"
        );

        Ok(RunAnalysisResult {
            result,
            strategy: dataset.weight_strategy(),
            criteria,
            options,
        })
    }
}
