//! Rows of the two derived tables

use serde::{Deserialize, Serialize};

use super::traits::{PersonId, impl_arrow_schema, impl_person_keyed};
use crate::schema;

/// Respondent-level features (`jobs_unique_data`)
///
/// Every field after `years_job_history` comes from a left join and is
/// `None` when the respondent has no matching row in that extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsUniqueRow {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Total_Jobs")]
    pub total_jobs: Option<f64>,
    /// Number of rows the respondent has in `jobs_data`
    #[serde(rename = "Years_Job_History")]
    pub years_job_history: i64,
    #[serde(rename = "Female")]
    pub female: Option<i64>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Education_Ctg")]
    pub education_ctg: Option<String>,
    #[serde(rename = "Frac_Years_Pvt")]
    pub frac_years_pvt: Option<i64>,
    #[serde(rename = "Frac_Years_Gvt")]
    pub frac_years_gvt: Option<i64>,
    #[serde(rename = "Frac_Years_Self")]
    pub frac_years_self: Option<i64>,
}

impl JobsUniqueRow {
    /// A row carrying only the `jobs_data` columns
    #[must_use]
    pub const fn new(person_id: PersonId, total_jobs: Option<f64>, years_job_history: i64) -> Self {
        Self {
            person_id,
            total_jobs,
            years_job_history,
            female: None,
            gender: None,
            education_ctg: None,
            frac_years_pvt: None,
            frac_years_gvt: None,
            frac_years_self: None,
        }
    }
}

/// Per-year job switching behaviour (`jobs_switch_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsSwitchRow {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Calendar_Year")]
    pub calendar_year: i64,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "Switch_Job_1")]
    pub switch_job_1: Option<f64>,
    #[serde(rename = "Switch_Job_2")]
    pub switch_job_2: Option<f64>,
}

impl_arrow_schema!(JobsUniqueRow, schema::jobs_unique_schema);
impl_arrow_schema!(JobsSwitchRow, schema::jobs_switch_schema);

impl_person_keyed!(JobsUniqueRow, JobsSwitchRow);
