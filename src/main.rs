//! AHPd command line
//!
//! Loads a decision document (JSON or YAML), runs the engine and prints the
//! result document on stdout. Logs go to stderr.
//!
//! # Exit codes
//!
//! - `0`: result printed
//! - `1`: configuration, file or parse failure
//! - `2`: the dataset was rejected by the engine

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ahpd::adapters::FileSource;
use ahpd::application::{RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler};
use ahpd::config::{EngineConfig, LoggingConfig};
use ahpd::domain::analysis::WeightingMethod;
use ahpd::domain::DocumentError;
use ahpd::ports::SourceError;

const EXIT_LOAD_FAILURE: u8 = 1;
const EXIT_REJECTED: u8 = 2;

/// Rank options against weighted min/max criteria
#[derive(Parser)]
#[command(name = "ahpd")]
#[command(version)]
#[command(about = "Rank options against weighted min/max criteria")]
struct Cli {
    /// Decision document (.json, .yaml or .yml)
    file: PathBuf,

    /// Omit the ranking
    #[arg(long)]
    no_rank: bool,

    /// Omit the per-option share of the total score
    #[arg(long)]
    no_global: bool,

    /// Omit the per-criterion contributions
    #[arg(long)]
    no_detailed: bool,

    /// Weighting law (overrides AHPD__WEIGHTING)
    #[arg(long, value_name = "equal|entropy")]
    weighting: Option<WeightingMethod>,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn exit_code_for(err: &RunAnalysisError) -> u8 {
    match err {
        RunAnalysisError::Decision(_) => EXIT_REJECTED,
        RunAnalysisError::Source(SourceError::Document(DocumentError::Decision(_))) => {
            EXIT_REJECTED
        }
        RunAnalysisError::Source(_) => EXIT_LOAD_FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match EngineConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ahpd: {}", err);
            return ExitCode::from(EXIT_LOAD_FAILURE);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("ahpd: invalid configuration: {}", err);
        return ExitCode::from(EXIT_LOAD_FAILURE);
    }

    init_tracing(&config.logging);

    let mut options = config.output.run_options();
    if cli.no_rank {
        options = options.with_rank(false);
    }
    if cli.no_global {
        options = options.with_contribution_global(false);
    }
    if cli.no_detailed {
        options = options.with_contribution_detailed(false);
    }

    let handler = RunAnalysisHandler::new(Arc::new(FileSource::new(&cli.file)))
        .with_weighting(cli.weighting.unwrap_or(config.weighting))
        .with_limits(config.limits.dataset_limits());

    let outcome = match handler.handle(RunAnalysisCommand { options }) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("ahpd: {}", err);
            return ExitCode::from(exit_code_for(&err));
        }
    };

    let rendered = if cli.compact {
        serde_json::to_string(&outcome.result)
    } else {
        serde_json::to_string_pretty(&outcome.result)
    };

    match rendered {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ahpd: failed to render result: {}", err);
            ExitCode::from(EXIT_LOAD_FAILURE)
        }
    }
}
