//! Input extract schemas
//!
//! Keys are non-nullable integers. Measurement columns are nullable `Float64`
//! so that empty cells and decimal notation (`1.0`) both parse.

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use std::sync::Arc;

use super::columns::*;

fn key(name: &str) -> Field {
    Field::new(name, DataType::Int64, false)
}

fn measure(name: &str) -> Field {
    Field::new(name, DataType::Float64, true)
}

/// Get the Arrow schema for `jobs_data`
///
/// One row per respondent and observed employment year.
#[must_use]
pub fn jobs_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        key(PERSON_ID),
        key(CALENDAR_YEAR),
        measure(TOTAL_JOBS),
        measure(SWITCH_JOB_1),
        measure(SWITCH_JOB_2),
    ]))
}

/// Get the Arrow schema for `gender_data`
#[must_use]
pub fn gender_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![key(PERSON_ID), measure(GENDER)]))
}

/// Get the Arrow schema for `highest_grade_completed_data`
#[must_use]
pub fn education_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![key(PERSON_ID), measure(MAX_EDUCATION)]))
}

/// Get the Arrow schema for `job_type_data`
///
/// A job can be reported with several type codes across survey rounds.
#[must_use]
pub fn job_type_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        key(PERSON_ID),
        key(JOB_ID),
        measure(JOB_TYPE),
    ]))
}

/// Get the Arrow schema for `job_history_data`
#[must_use]
pub fn job_history_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        key(PERSON_ID),
        key(JOB_ID),
        key(CALENDAR_YEAR),
    ]))
}

/// Get the Arrow schema for `age_data`
#[must_use]
pub fn age_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        key(PERSON_ID),
        key(CALENDAR_YEAR),
        measure(AGE),
    ]))
}
