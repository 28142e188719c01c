//! Feature table construction
//!
//! `FeatureBuilder` runs the derivation steps in a fixed order:
//! 1. years of history per respondent from `jobs_data`
//! 2. gender flag and label, left-joined by respondent
//! 3. education category, left-joined by respondent
//! 4. job category fractions, left-joined by respondent
//! 5. the job switching table with ages, independent of 1-4

use std::path::PathBuf;
use std::time::Instant;

use log::info;

use super::education::education_features;
use super::gender::gender_features;
use super::history::years_of_history;
use super::job_category::job_category_fractions;
use super::join::left_merge;
use super::statistics::FeatureSummary;
use super::switch::job_switch_table;
use crate::config::FeatureConfig;
use crate::error::Result;
use crate::extract::FeatureInputs;
use crate::models::{JobsSwitchRow, JobsUniqueRow};
use crate::utils::logging::{create_spinner, finish_and_clear, finish_progress_bar};
use crate::writer::write_table;

/// File stem of the respondent-level table
pub const JOBS_UNIQUE_STEM: &str = "jobs_unique_data";
/// File stem of the respondent-year table
pub const JOBS_SWITCH_STEM: &str = "jobs_switch_data";
/// File name of the optional JSON summary
pub const SUMMARY_FILE: &str = "feature_summary.json";

/// The two derived tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureOutputs {
    /// One row per respondent
    pub jobs_unique: Vec<JobsUniqueRow>,
    /// One row per respondent-year
    pub jobs_switch: Vec<JobsSwitchRow>,
}

impl FeatureOutputs {
    /// Summary statistics of both tables
    #[must_use]
    pub fn summary(&self) -> FeatureSummary {
        FeatureSummary::from_tables(&self.jobs_unique, &self.jobs_switch)
    }

    /// Write both tables (and the summary if configured) to `config.output_dir`
    ///
    /// If either write fails the run has failed and both files should be
    /// treated as unreliable.
    ///
    /// # Returns
    /// Paths of the files written
    pub fn write(&self, config: &FeatureConfig) -> Result<Vec<PathBuf>> {
        let mut written = vec![
            write_table(&self.jobs_unique, JOBS_UNIQUE_STEM, config)?,
            write_table(&self.jobs_switch, JOBS_SWITCH_STEM, config)?,
        ];

        if config.write_summary {
            let path = config.output_dir.join(SUMMARY_FILE);
            self.summary().write_json(&path)?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Builder for the derived feature tables
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    config: FeatureConfig,
}

impl FeatureBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration used by [`FeatureBuilder::run`]
    #[must_use]
    pub fn with_config(mut self, config: FeatureConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration this builder runs with
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Derive both tables from in-memory extracts
    #[must_use]
    pub fn build(&self, inputs: &FeatureInputs) -> FeatureOutputs {
        let start = Instant::now();

        let unique = years_of_history(&inputs.jobs);

        let genders = gender_features(&inputs.gender);
        let unique = left_merge(
            unique,
            &genders,
            |row| row.person_id,
            |g| g.person_id,
            |row, g| {
                row.female = Some(g.female);
                row.gender = Some(g.label.as_str().to_string());
            },
        );

        let education = education_features(&inputs.education);
        let unique = left_merge(
            unique,
            &education,
            |row| row.person_id,
            |e| e.person_id,
            |row, e| row.education_ctg = e.category.map(|c| c.as_str().to_string()),
        );

        let fractions = job_category_fractions(&inputs.job_types, &inputs.job_history);
        let jobs_unique = left_merge(
            unique,
            &fractions,
            |row| row.person_id,
            |f| f.person_id,
            |row, f| {
                row.frac_years_pvt = f.frac_years_pvt;
                row.frac_years_gvt = f.frac_years_gvt;
                row.frac_years_self = f.frac_years_self;
            },
        );

        let jobs_switch = job_switch_table(&inputs.jobs, &inputs.ages);

        info!(
            "Built {} respondent rows and {} respondent-year rows in {:?}",
            jobs_unique.len(),
            jobs_switch.len(),
            start.elapsed()
        );

        FeatureOutputs {
            jobs_unique,
            jobs_switch,
        }
    }

    /// Read the extracts, derive the tables and write them
    ///
    /// # Errors
    /// Fails if any extract cannot be read or either table cannot be written
    pub fn run(&self) -> Result<FeatureOutputs> {
        let spinner = create_spinner(Some("Loading survey extracts"));
        let inputs = FeatureInputs::load(&self.config)?;
        finish_and_clear(&spinner);
        info!("Loaded {} extract rows", inputs.total_rows());

        let outputs = self.build(&inputs);
        info!("{}", outputs.summary());

        let spinner = create_spinner(Some("Writing feature tables"));
        let written = outputs.write(&self.config)?;
        finish_progress_bar(&spinner, Some(&format!("Wrote {} files", written.len())));

        Ok(outputs)
    }
}
