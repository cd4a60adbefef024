//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a data file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Referenced entity doesn't exist (e.g., a featured ID for an unknown add-on)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
