//! AHPd - Multi-criteria decision engine
//!
//! This crate ranks a set of options against weighted criteria. Each criterion
//! is either minimized or maximized; option values are min-max normalized per
//! criterion, combined with the criterion weights and reported as a ranking
//! plus per-criterion and per-option contributions.
//!
//! ```
//! use ahpd::domain::analysis::RunOptions;
//! use ahpd::domain::Dataset;
//!
//! let mut dataset = Dataset::new();
//! dataset.set_criteria([("cost", "min"), ("quality", "max")])?;
//! dataset.set_option("X", [("cost", 10.0), ("quality", 5.0)])?;
//! dataset.set_option("Y", [("cost", 20.0), ("quality", 10.0)])?;
//!
//! let result = dataset.run(RunOptions::default())?;
//! assert_eq!(result.winner().map(|o| o.as_str()), Some("X"));
//! # Ok::<(), ahpd::domain::foundation::DecisionError>(())
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
