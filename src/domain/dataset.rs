//! Dataset - Session object owning the registries and running the engine.
//!
//! A `Dataset` replaces process-wide registries: each instance holds its own
//! criteria, options, weighting strategy and size limits, so independent
//! computations can coexist. `run` borrows the dataset immutably, which makes
//! the snapshot consistent for the whole computation.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::analysis::{
    Contribution, DatasetLimits, DecisionMatrix, DecisionResult, EqualWeights, NormalizedMatrix,
    Normalizer, RankedAlternative, Ranker, ResultAssembler, RunOptions, Scores, ScoringEngine,
    WeightStrategy, Weights,
};
use super::foundation::{CriterionName, DecisionError, Direction, OptionName};
use super::registry::{Alternative, CriteriaRegistry, OptionRegistry};

/// Criteria, options and engine settings for one decision.
#[derive(Clone)]
pub struct Dataset {
    criteria: CriteriaRegistry,
    options: OptionRegistry,
    limits: DatasetLimits,
    strategy: Arc<dyn WeightStrategy>,
}

impl Dataset {
    /// Creates an empty dataset with equal weighting and default limits.
    pub fn new() -> Self {
        Self {
            criteria: CriteriaRegistry::new(),
            options: OptionRegistry::new(),
            limits: DatasetLimits::default(),
            strategy: Arc::new(EqualWeights),
        }
    }

    /// Replaces the size limits checked at run time.
    pub fn with_limits(mut self, limits: DatasetLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the weighting strategy.
    pub fn with_weight_strategy(mut self, strategy: impl WeightStrategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// Replaces the weighting strategy with a shared one.
    pub fn set_weight_strategy(&mut self, strategy: Arc<dyn WeightStrategy>) {
        self.strategy = strategy;
    }

    /// Name of the active weighting strategy.
    pub fn weight_strategy(&self) -> &'static str {
        self.strategy.name()
    }

    /// Current size limits.
    pub fn limits(&self) -> DatasetLimits {
        self.limits
    }

    /// Registers or overwrites criteria from `(name, "min" | "max")` pairs.
    pub fn set_criteria<I, N, D>(&mut self, criteria: I) -> Result<(), DecisionError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: AsRef<str>,
    {
        self.criteria.set_criteria(criteria)
    }

    /// Registers or overwrites a single criterion.
    pub fn set_criterion(&mut self, name: CriterionName, direction: Direction) {
        self.criteria.set_criterion(name, direction);
    }

    /// Direction of a criterion, or `None` if it is not registered.
    pub fn get_criteria(&self, name: &str) -> Option<Direction> {
        self.criteria.get_criteria(name)
    }

    /// Criterion names in registration order.
    pub fn list_criteria(&self) -> &[CriterionName] {
        self.criteria.list_criteria()
    }

    /// Stores or overwrites an option's raw values.
    pub fn set_option<N, I, K>(&mut self, name: N, values: I) -> Result<(), DecisionError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.options.set_option(&self.criteria, name, values)
    }

    /// Returns a stored option.
    pub fn get_option(&self, name: &str) -> Option<&Alternative> {
        self.options.get_option(name)
    }

    /// Option names in registration order.
    pub fn list_options(&self) -> &[OptionName] {
        self.options.list_options()
    }

    pub fn criteria(&self) -> &CriteriaRegistry {
        &self.criteria
    }

    pub fn options(&self) -> &OptionRegistry {
        &self.options
    }

    /// Validates the registries and takes an immutable matrix snapshot.
    pub fn snapshot(&self) -> Result<DecisionMatrix, DecisionError> {
        DecisionMatrix::from_registries(&self.criteria, &self.options, &self.limits)
    }

    /// Runs every stage and keeps the intermediate results.
    pub fn evaluate(&self) -> Result<Evaluation, DecisionError> {
        let matrix = self.snapshot()?;
        Evaluation::compute(matrix, self.strategy.as_ref())
    }

    /// Runs the engine and assembles the requested sections.
    ///
    /// Fails before any scoring on an empty, oversized or incomplete dataset,
    /// and never returns a partial result.
    pub fn run(&self, options: RunOptions) -> Result<DecisionResult, DecisionError> {
        Ok(self.evaluate()?.assemble(options))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("criteria", &self.criteria)
            .field("options", &self.options)
            .field("limits", &self.limits)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Every intermediate stage of one run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub matrix: DecisionMatrix,
    pub normalized: NormalizedMatrix,
    pub weights: Weights,
    pub scores: Scores,
    pub ranking: Vec<RankedAlternative>,
}

impl Evaluation {
    /// Normalizes, weights, scores and ranks a snapshot.
    pub fn compute(
        matrix: DecisionMatrix,
        strategy: &dyn WeightStrategy,
    ) -> Result<Self, DecisionError> {
        let normalized = Normalizer::normalize(&matrix);

        let weights = strategy.derive_weights(&matrix, &normalized)?;
        weights.verify(strategy.name(), &matrix)?;
        debug!(
            strategy = strategy.name(),
            criteria = matrix.criterion_count(),
            options = matrix.alternative_count(),
            "Derived criterion weights"
        );

        let scores = ScoringEngine::score(&matrix, &normalized, &weights)?;
        let ranking = Ranker::rank(&matrix, &scores);

        Ok(Self {
            matrix,
            normalized,
            weights,
            scores,
            ranking,
        })
    }

    /// Per-cell contribution records, row-major.
    pub fn contributions(&self) -> Vec<Contribution> {
        ScoringEngine::contributions(&self.matrix, &self.normalized, &self.scores)
    }

    /// Packages the sections selected by `options`.
    pub fn assemble(&self, options: RunOptions) -> DecisionResult {
        ResultAssembler::assemble(
            &self.matrix,
            &self.weights,
            &self.scores,
            &self.ranking,
            options,
        )
    }
}
