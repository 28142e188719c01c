//! Error handling for feature generation.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for reading extracts, building features and writing outputs
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// An expected file or directory does not exist
    #[error("File not found: {path} ({context})")]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
        /// What the file was needed for
        context: String,
    },

    /// Error parsing CSV data or assembling record batches
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error writing Parquet output
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),

    /// Error converting between record batches and typed rows
    #[error("Record conversion error: {0}")]
    ConversionError(#[from] serde_arrow::Error),

    /// Error serializing the run summary
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Extract columns do not match the declared schema
    #[error("Schema error: {0}")]
    SchemaError(String),
}

impl FeatureError {
    /// Create a file-not-found error for `path`
    pub fn file_not_found(path: impl Into<PathBuf>, context: impl Into<String>) -> Self {
        Self::FileNotFound {
            path: path.into(),
            context: context.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError(message.into())
    }
}

/// Result type for feature generation operations
pub type Result<T> = std::result::Result<T, FeatureError>;
