//! Summary statistics for a feature run
//!
//! Computed from the derived tables only, logged after every build and
//! optionally written as JSON next to the outputs.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::education::EducationCategory;
use crate::error::Result;
use crate::error::util::safe_create_file;
use crate::models::{JobsSwitchRow, JobsUniqueRow};

/// Key used for rows whose label is missing
pub const MISSING_LABEL: &str = "Missing";

/// Structure containing summary statistics of the derived tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSummary {
    /// Rows in `jobs_unique_data`
    pub respondent_count: usize,
    /// Rows in `jobs_switch_data`
    pub person_year_count: usize,
    /// Respondents per `Gender` label
    pub gender_counts: BTreeMap<String, usize>,
    /// Respondents per `Education_Ctg` label; every category is present
    pub education_counts: BTreeMap<String, usize>,
    /// Respondents without any row in the job history
    pub without_job_history: usize,
    pub mean_frac_years_pvt: Option<f64>,
    pub mean_frac_years_gvt: Option<f64>,
    pub mean_frac_years_self: Option<f64>,
}

fn count_labels<'a>(labels: impl Iterator<Item = Option<&'a str>>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts
            .entry(label.unwrap_or(MISSING_LABEL).to_string())
            .or_insert(0) += 1;
    }
    counts
}

fn mean(values: impl Iterator<Item = Option<i64>>) -> Option<f64> {
    let (sum, n) = values
        .flatten()
        .fold((0i64, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum as f64 / n as f64)
}

impl FeatureSummary {
    /// Calculate the summary of a run's outputs
    #[must_use]
    pub fn from_tables(unique: &[JobsUniqueRow], switches: &[JobsSwitchRow]) -> Self {
        let mut education_counts = count_labels(unique.iter().map(|r| r.education_ctg.as_deref()));
        for category in EducationCategory::all() {
            education_counts.entry(category.as_str().to_string()).or_insert(0);
        }

        Self {
            respondent_count: unique.len(),
            person_year_count: switches.len(),
            gender_counts: count_labels(unique.iter().map(|r| r.gender.as_deref())),
            education_counts,
            without_job_history: unique
                .iter()
                .filter(|r| r.frac_years_pvt.is_none())
                .count(),
            mean_frac_years_pvt: mean(unique.iter().map(|r| r.frac_years_pvt)),
            mean_frac_years_gvt: mean(unique.iter().map(|r| r.frac_years_gvt)),
            mean_frac_years_self: mean(unique.iter().map(|r| r.frac_years_self)),
        }
    }

    /// Write the summary as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = safe_create_file(path, "writing feature summary")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for FeatureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Feature Summary:")?;
        writeln!(f, "  Respondents: {}", self.respondent_count)?;
        writeln!(f, "  Person-Years: {}", self.person_year_count)?;
        writeln!(f, "  Without Job History: {}", self.without_job_history)?;
        writeln!(f, "  Gender:")?;
        for (label, count) in &self.gender_counts {
            writeln!(f, "    {label}: {count}")?;
        }
        writeln!(f, "  Education:")?;
        for (label, count) in &self.education_counts {
            writeln!(f, "    {label}: {count}")?;
        }
        let fmt_mean = |m: Option<f64>| m.map_or_else(|| "n/a".to_string(), |m| format!("{m:.1}%"));
        writeln!(f, "  Mean Years Pvt: {}", fmt_mean(self.mean_frac_years_pvt))?;
        writeln!(f, "  Mean Years Gvt: {}", fmt_mean(self.mean_frac_years_gvt))?;
        write!(f, "  Mean Years Self: {}", fmt_mean(self.mean_frac_years_self))
    }
}
