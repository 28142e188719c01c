//! Utility functions for error handling
//!
//! File-system helpers that turn a bare `io::Error` into a `FeatureError`
//! carrying the path and the reason the file was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FeatureError, Result};

/// Open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(FeatureError::file_not_found(
            path,
            format!("needed for: {purpose}"),
        ));
    }

    fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            FeatureError::file_not_found(path, "removed during operation")
        }
        _ => FeatureError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to open {} for {purpose}: {e}", path.display()),
        )),
    })
}

/// Create (or truncate) a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        FeatureError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to create {} for {purpose}: {e}", path.display()),
        ))
    })
}

/// Check that a directory exists
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(FeatureError::file_not_found(
            path,
            format!("expected a directory for: {purpose}"),
        ));
    }
    Ok(())
}

/// Make sure an output directory exists, creating it and its parents if needed
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        FeatureError::IoError(io::Error::new(
            e.kind(),
            format!("Failed to create directory {}: {e}", path.display()),
        ))
    })
}
