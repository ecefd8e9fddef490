//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `source` - Decision documents from files or in-memory text

pub mod source;

pub use source::{DocumentFormat, FileSource, StringSource};
