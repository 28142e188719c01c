//! Employment feature derivation
//!
//! Turns the six survey extracts into two analysis tables:
//! `jobs_unique_data` (one row per respondent) and `jobs_switch_data`
//! (one row per respondent-year).

pub mod builder;
pub mod education;
pub mod gender;
pub mod history;
pub mod job_category;
pub mod join;
pub mod statistics;
pub mod switch;

pub use builder::{FeatureBuilder, FeatureOutputs, JOBS_SWITCH_STEM, JOBS_UNIQUE_STEM};
pub use education::EducationCategory;
pub use gender::GenderLabel;
pub use job_category::JobCategory;
pub use statistics::FeatureSummary;
