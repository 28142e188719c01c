//! A Rust library for deriving analysis-ready employment features from
//! survey extracts, using Arrow record batches for reading and writing.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use algorithm::features::{FeatureBuilder, FeatureOutputs, FeatureSummary};
pub use config::{FeatureConfig, OutputFormat};
pub use error::{FeatureError, Result};
pub use extract::{ExtractLoader, FeatureInputs};
pub use models::{JobsSwitchRow, JobsUniqueRow};

// Arrow types
pub use arrow::record_batch::RecordBatch;
