//! Error types for world data loading.

use thiserror::Error;

/// Errors that can occur when loading world or visual data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// File parsed but describes a world that cannot be built.
    #[error("Invalid world config: {0}")]
    InvalidConfig(String),
}
