//! Application layer - Handlers and shared state.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod shared_dataset;

pub use handlers::{
    RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
};
pub use shared_dataset::SharedDataset;
