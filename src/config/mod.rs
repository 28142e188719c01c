//! Configuration for feature generation.

use std::fmt;
use std::path::{Path, PathBuf};

/// Default number of rows per record batch when reading extracts
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// File format for the derived tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Apache Parquet
    Parquet,
}

impl OutputFormat {
    /// File extension used for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Parquet => write!(f, "Parquet"),
        }
    }
}

/// Configuration for a feature generation run
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    /// Directory holding the six input extracts
    pub input_dir: PathBuf,
    /// Directory the derived tables are written to
    pub output_dir: PathBuf,
    /// Format of the derived tables
    pub output_format: OutputFormat,
    /// Prepend a positional row index as the first CSV column
    pub write_index: bool,
    /// Write `feature_summary.json` next to the derived tables
    pub write_summary: bool,
    /// Rows per record batch when reading extracts
    pub batch_size: usize,
    /// Field delimiter of the input extracts
    pub delimiter: u8,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/interim"),
            output_dir: PathBuf::from("data/processed"),
            output_format: OutputFormat::Csv,
            write_index: true,
            write_summary: false,
            batch_size: DEFAULT_BATCH_SIZE,
            delimiter: b',',
        }
    }
}

impl FeatureConfig {
    /// Read extracts from `dir`
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Write derived tables to `dir`
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Toggle the positional index column
    #[must_use]
    pub const fn with_index(mut self, write_index: bool) -> Self {
        self.write_index = write_index;
        self
    }

    /// Toggle the JSON run summary
    #[must_use]
    pub const fn with_summary(mut self, write_summary: bool) -> Self {
        self.write_summary = write_summary;
        self
    }

    /// Path of an output table with the configured extension
    #[must_use]
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}.{}", self.output_format.extension()))
    }
}

impl fmt::Display for FeatureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature Configuration:")?;
        writeln!(f, "  Input Directory: {}", self.input_dir.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Output Format: {}", self.output_format)?;
        writeln!(f, "  Index Column: {}", self.write_index)?;
        writeln!(f, "  Summary: {}", self.write_summary)?;
        write!(f, "  Batch Size: {}", self.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = FeatureConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("data/interim"));
        assert_eq!(
            config.output_path("jobs_unique_data"),
            PathBuf::from("data/processed/jobs_unique_data.csv")
        );
        assert!(config.write_index);
    }

    #[test]
    fn test_parquet_output_path() {
        let config = FeatureConfig::default()
            .with_output_dir("/tmp/out")
            .with_output_format(OutputFormat::Parquet);
        assert_eq!(
            config.output_path("jobs_switch_data"),
            PathBuf::from("/tmp/out/jobs_switch_data.parquet")
        );
    }
}
