//! Integration tests for loading decision documents through the adapters.

use std::io::Write;
use std::sync::Arc;

use ahpd::adapters::{FileSource, StringSource};
use ahpd::application::{RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler, SharedDataset};
use ahpd::domain::analysis::{RunOptions, WeightingMethod};
use ahpd::domain::foundation::Direction;
use ahpd::domain::{DecisionDocument, DocumentError};
use ahpd::ports::{DatasetSource, SourceError};

const FINANCE_JSON: &str = r#"{
    "data": {
        "criteria": {
            "return %": "max",
            "risk": "min",
            "liquidity days": "min"
        },
        "options": {
            "Bonds": [6.5, 2, 30],
            "Stocks": [12.0, 8, 3],
            "Savings": [4.0, 1, 1]
        }
    }
}"#;

const PHONES_YAML: &str = "\
criteria:
  price US$: min
  storage GB: max
  camera Mpx: max
options:
  Phone A: [9494, 128, 48]
  Phone B:
    price US$: 4139
    storage GB: 256
    camera Mpx: 50
  Phone D: [1885, 128, 64]
";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn json_string_and_file_load_the_same_dataset() {
    let file = write_temp(".json", FINANCE_JSON);

    let from_string = StringSource::json(FINANCE_JSON).load_dataset().unwrap();
    let from_file = FileSource::new(file.path()).load_dataset().unwrap();

    assert_eq!(from_string.criteria(), from_file.criteria());
    assert_eq!(from_string.options(), from_file.options());
    assert_eq!(
        from_file.list_criteria().iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        vec!["return %", "risk", "liquidity days"]
    );
    assert_eq!(from_file.get_criteria("risk"), Some(Direction::Min));
    assert_eq!(from_file.get_option("Stocks").unwrap().value("risk"), Some(8.0));
}

#[test]
fn yaml_file_mixes_positional_and_named_values() {
    let file = write_temp(".yml", PHONES_YAML);

    let dataset = FileSource::new(file.path()).load_dataset().unwrap();
    let result = dataset.run(RunOptions::default()).unwrap();

    assert_eq!(dataset.list_options().len(), 3);
    assert_eq!(dataset.get_option("Phone B").unwrap().value("camera Mpx"), Some(50.0));
    assert_eq!(result.winner().map(|o| o.as_str()), Some("Phone D"));
}

#[test]
fn handler_runs_file_with_configured_strategy() {
    let file = write_temp(".json", FINANCE_JSON);
    let handler = RunAnalysisHandler::new(Arc::new(FileSource::new(file.path())))
        .with_weighting(WeightingMethod::Entropy);

    let outcome = handler.handle(RunAnalysisCommand::default()).unwrap();

    assert_eq!(outcome.strategy, "entropy");
    assert_eq!(outcome.criteria, 3);
    assert_eq!(outcome.options, 3);
    assert!(outcome.result.rank.is_some());
}

#[test]
fn arity_mismatch_names_the_option() {
    let source = StringSource::json(
        r#"{"criteria": {"a": "max", "b": "min"}, "options": {"Ok": [1, 2], "Bad": [1, 2, 3]}}"#,
    );

    match source.load_dataset() {
        Err(SourceError::Document(DocumentError::Arity {
            option,
            expected,
            actual,
        })) => {
            assert_eq!(option, "Bad");
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected arity error, got {:?}", other),
    }
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let handler = RunAnalysisHandler::new(Arc::new(FileSource::new("dataset.csv")));

    assert!(matches!(
        handler.handle(RunAnalysisCommand::default()),
        Err(RunAnalysisError::Source(SourceError::UnsupportedFormat(_)))
    ));
}

#[test]
fn loaded_document_feeds_a_shared_dataset() {
    let dataset = StringSource::yaml(PHONES_YAML).load_dataset().unwrap();
    let shared = SharedDataset::new(dataset);

    shared
        .set_option(
            "Phone C",
            [("price US$", 4429.0), ("storage GB", 256.0), ("camera Mpx", 50.0)],
        )
        .unwrap();

    let captured = DecisionDocument::from_dataset(&shared.snapshot());
    assert_eq!(captured.options.len(), 4);
    assert_eq!(
        shared.run(RunOptions::default()).unwrap(),
        captured.into_dataset().unwrap().run(RunOptions::default()).unwrap()
    );
}
