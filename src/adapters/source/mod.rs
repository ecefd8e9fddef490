//! Dataset source adapters (file and in-memory, JSON and YAML).

mod file_source;
mod format;
mod string_source;

pub use file_source::FileSource;
pub use format::DocumentFormat;
pub use string_source::StringSource;
