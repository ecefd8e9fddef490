//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Port for reading decision documents

mod dataset_source;

pub use dataset_source::{DatasetSource, SourceError};
