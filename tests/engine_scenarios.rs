//! Integration tests for complete engine runs.
//!
//! These tests drive the public `Dataset` API end-to-end:
//! 1. Register criteria and options
//! 2. Run the engine
//! 3. Check ranking, weights and contributions in the result

use ahpd::domain::analysis::{EntropyWeights, RunOptions};
use ahpd::domain::foundation::{DecisionError, Direction, ErrorCode};
use ahpd::domain::Dataset;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Fixtures
// =============================================================================

fn cost_quality() -> Dataset {
    let mut dataset = Dataset::new();
    dataset.set_criteria([("cost", "min"), ("quality", "max")]).unwrap();
    dataset.set_option("X", [("cost", 10.0), ("quality", 5.0)]).unwrap();
    dataset.set_option("Y", [("cost", 20.0), ("quality", 10.0)]).unwrap();
    dataset
}

fn phones() -> Dataset {
    let mut dataset = Dataset::new();
    dataset
        .set_criteria([
            ("price US$", "min"),
            ("storage GB", "max"),
            ("memory GB", "max"),
            ("camera Mpx", "max"),
            ("battery mAh", "max"),
        ])
        .unwrap();

    let rows = [
        ("Phone A", [9494.0, 128.0, 6.0, 48.0, 4323.0]),
        ("Phone B", [4139.0, 256.0, 8.0, 50.0, 4500.0]),
        ("Phone C", [4429.0, 256.0, 8.0, 50.0, 4300.0]),
        ("Phone D", [1885.0, 128.0, 6.0, 64.0, 5065.0]),
    ];
    for (name, values) in rows {
        let pairs: Vec<(String, f64)> = dataset
            .list_criteria()
            .iter()
            .map(|c| c.to_string())
            .zip(values)
            .collect();
        dataset.set_option(name, pairs).unwrap();
    }
    dataset
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn opposing_criteria_tie_goes_to_first_registered() {
    let dataset = cost_quality();
    let evaluation = dataset.evaluate().unwrap();

    assert_eq!(evaluation.normalized.column(0), vec![1.0, 0.0]);
    assert_eq!(evaluation.normalized.column(1), vec![0.0, 1.0]);
    assert_eq!(evaluation.weights.get(0), Some(0.5));
    assert_eq!(evaluation.weights.get(1), Some(0.5));
    assert_eq!(evaluation.scores.totals(), &[0.5, 0.5]);

    let result = dataset.run(RunOptions::default()).unwrap();
    let rank = result.rank.unwrap();
    assert_eq!(rank[0].option().as_str(), "X");
    assert_eq!(rank[1].option().as_str(), "Y");
    assert_eq!(rank[0].score(), rank[1].score());
}

#[test]
fn single_option_single_criterion_is_degenerate() {
    let mut dataset = Dataset::new();
    dataset.set_criteria([("speed", "max")]).unwrap();
    dataset.set_option("Z", [("speed", 42.0)]).unwrap();

    let result = dataset.run(RunOptions::default()).unwrap();

    let rank = result.rank.clone().unwrap();
    assert_eq!(rank.len(), 1);
    assert_eq!(rank[0].option().as_str(), "Z");
    assert_eq!(rank[0].score(), 1.0);
    assert_eq!(result.criterion_weight("speed"), Some(1.0));
    assert_eq!(result.contribution_of("Z", "speed"), Some(1.0));
    assert_eq!(result.percentage_of("Z"), Some(100.0));
}

#[test]
fn option_with_unknown_criterion_leaves_registry_untouched() {
    let mut dataset = cost_quality();
    let before = dataset.options().clone();

    let err = dataset
        .set_option("W", [("cost", 1.0), ("weight", 3.0)])
        .unwrap_err();

    assert_eq!(err, DecisionError::unknown_criterion("W", "weight"));
    assert_eq!(err.code(), ErrorCode::UnknownCriterion);
    assert_eq!(dataset.options(), &before);
    assert!(dataset.get_option("W").is_none());
}

// =============================================================================
// Smartphone comparison
// =============================================================================

#[test]
fn phones_rank_by_weighted_total() {
    let result = phones().run(RunOptions::default()).unwrap();

    let order: Vec<&str> = result
        .rank
        .as_ref()
        .unwrap()
        .iter()
        .map(|entry| entry.option().as_str())
        .collect();
    assert_eq!(order, vec!["Phone B", "Phone D", "Phone C", "Phone A"]);

    let rank = result.rank.as_ref().unwrap();
    assert_close(rank[0].score(), 0.618042);
    assert_close(rank[1].score(), 0.6);
    assert_close(rank[3].score(), 0.006013);
}

#[test]
fn phones_contributions_are_consistent() {
    let result = phones().run(RunOptions::default()).unwrap();
    let contribution = result.contribution.as_ref().unwrap();

    for weight in contribution.criteria_weights.values() {
        assert!((weight - 0.2).abs() < TOLERANCE);
    }

    // Cheapest phone earns the full price weight
    assert_close(result.contribution_of("Phone D", "price US$").unwrap(), 0.2);
    assert_eq!(result.contribution_of("Phone A", "price US$"), Some(0.0));

    let by_criteria = contribution
        .alternatives_contribution
        .by_criteria
        .as_ref()
        .unwrap();
    let rank = result.rank.as_ref().unwrap();
    for entry in rank {
        let sum: f64 = by_criteria[entry.option()].values().sum();
        assert!((sum - entry.score()).abs() < TOLERANCE);
    }

    let total_pct: f64 = contribution
        .alternatives_contribution
        .total_percentage
        .as_ref()
        .unwrap()
        .values()
        .sum();
    assert!((total_pct - 100.0).abs() < 1e-6);
}

#[test]
fn phones_output_keeps_registration_order() {
    let result = phones().run(RunOptions::default()).unwrap();
    let contribution = result.contribution.unwrap();

    let criteria: Vec<&str> = contribution
        .criteria_weights
        .keys()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(
        criteria,
        vec!["price US$", "storage GB", "memory GB", "camera Mpx", "battery mAh"]
    );

    let percentages = contribution
        .alternatives_contribution
        .total_percentage
        .unwrap();
    let options: Vec<&str> = percentages.keys().map(|o| o.as_str()).collect();
    assert_eq!(options, vec!["Phone A", "Phone B", "Phone C", "Phone D"]);
}

#[test]
fn phones_under_entropy_weighting_still_sum_to_one() {
    let result = phones()
        .with_weight_strategy(EntropyWeights)
        .run(RunOptions::default())
        .unwrap();

    let weights = result.contribution.unwrap().criteria_weights;
    let sum: f64 = weights.values().sum();
    assert!((sum - 1.0).abs() < TOLERANCE);
    assert!(weights.values().all(|w| *w >= 0.0));
}

// =============================================================================
// Output flags
// =============================================================================

#[test]
fn output_flags_select_sections() {
    let dataset = phones();

    let rank_only = dataset.run(RunOptions::none().with_rank(true)).unwrap();
    assert!(rank_only.rank.is_some());
    assert!(rank_only.contribution.is_none());

    let global = dataset
        .run(RunOptions::none().with_contribution_global(true))
        .unwrap();
    let global = global.contribution.unwrap();
    assert!(global.alternatives_contribution.total_percentage.is_some());
    assert!(global.alternatives_contribution.by_criteria.is_none());
    assert_eq!(global.criteria_weights.len(), 5);

    let detailed = dataset
        .run(RunOptions::none().with_contribution_detailed(true))
        .unwrap();
    let detailed = detailed.contribution.unwrap();
    assert!(detailed.alternatives_contribution.total_percentage.is_none());
    assert!(detailed.alternatives_contribution.by_criteria.is_some());
}

#[test]
fn serialized_result_matches_consumer_shape() {
    let result = cost_quality().run(RunOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["rank"][0][0], "X");
    assert_eq!(json["rank"][0][1], 0.5);
    assert_eq!(json["contribution"]["criteria_weights"]["cost"], 0.5);
    assert_eq!(
        json["contribution"]["alternatives_contribution"]["by_criteria"]["Y"]["quality"],
        0.5
    );
    assert_eq!(
        json["contribution"]["alternatives_contribution"]["total_percentage"]["X"],
        50.0
    );
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn invalid_direction_is_rejected_atomically() {
    let mut dataset = cost_quality();

    let err = dataset
        .set_criteria([("speed", "max"), ("weight", "lowest")])
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidDirection);
    assert!(dataset.get_criteria("speed").is_none());
    assert_eq!(dataset.list_criteria().len(), 2);
}

#[test]
fn direction_tokens_ignore_case() {
    let mut dataset = Dataset::new();
    dataset.set_criteria([("a", "MIN"), ("b", " Max ")]).unwrap();

    assert_eq!(dataset.get_criteria("a"), Some(Direction::Min));
    assert_eq!(dataset.get_criteria("b"), Some(Direction::Max));
}

#[test]
fn incomplete_option_fails_before_scoring() {
    let mut dataset = cost_quality();
    dataset.set_option("Z", [("cost", 5.0)]).unwrap();

    let err = dataset.run(RunOptions::default()).unwrap_err();

    assert_eq!(err, DecisionError::incomplete_option("Z", "quality"));
    assert_eq!(err.code(), ErrorCode::IncompleteOption);
}

#[test]
fn missing_criteria_or_options_is_empty_dataset() {
    let mut no_options = Dataset::new();
    no_options.set_criteria([("cost", "min")]).unwrap();

    assert_eq!(
        no_options.run(RunOptions::default()),
        Err(DecisionError::EmptyDataset {
            criteria: 1,
            options: 0
        })
    );
    assert_eq!(
        Dataset::new().run(RunOptions::default()).unwrap_err().code(),
        ErrorCode::EmptyDataset
    );
}

#[test]
fn non_finite_values_are_rejected() {
    let mut dataset = cost_quality();

    let err = dataset
        .set_option("N", [("cost", f64::NAN), ("quality", 1.0)])
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert!(dataset.get_option("N").is_none());
}
