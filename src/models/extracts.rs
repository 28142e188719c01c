//! Rows of the six survey extracts

use serde::{Deserialize, Serialize};

use super::traits::{PersonId, impl_arrow_schema, impl_person_keyed};
use crate::schema;

/// One observed employment year of a respondent (`jobs_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Calendar_Year")]
    pub calendar_year: i64,
    /// Total number of jobs held over the whole survey; constant per respondent
    #[serde(rename = "Total_Jobs")]
    pub total_jobs: Option<f64>,
    #[serde(rename = "Switch_Job_1")]
    pub switch_job_1: Option<f64>,
    #[serde(rename = "Switch_Job_2")]
    pub switch_job_2: Option<f64>,
}

/// Raw gender code of a respondent (`gender_data`); code 1 is male
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Gender")]
    pub gender: Option<f64>,
}

/// Highest grade completed, in years (`highest_grade_completed_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Max_Education")]
    pub max_education: Option<f64>,
}

/// One reported type code for a job (`job_type_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTypeRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Job_ID")]
    pub job_id: i64,
    #[serde(rename = "Job_Type")]
    pub job_type: Option<f64>,
}

/// A job held by a respondent in a given year (`job_history_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHistoryRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Job_ID")]
    pub job_id: i64,
    #[serde(rename = "Calendar_Year")]
    pub calendar_year: i64,
}

/// Age of a respondent in a given year (`age_data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRecord {
    #[serde(rename = "Person_Id")]
    pub person_id: PersonId,
    #[serde(rename = "Calendar_Year")]
    pub calendar_year: i64,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
}

impl_arrow_schema!(JobRecord, schema::jobs_schema);
impl_arrow_schema!(GenderRecord, schema::gender_schema);
impl_arrow_schema!(EducationRecord, schema::education_schema);
impl_arrow_schema!(JobTypeRecord, schema::job_type_schema);
impl_arrow_schema!(JobHistoryRecord, schema::job_history_schema);
impl_arrow_schema!(AgeRecord, schema::age_schema);

impl_person_keyed!(
    JobRecord,
    GenderRecord,
    EducationRecord,
    JobTypeRecord,
    JobHistoryRecord,
    AgeRecord,
);
