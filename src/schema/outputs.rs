//! Derived table schemas

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use std::sync::Arc;

use super::columns::*;

/// Header of the positional index column prepended to CSV output
pub const INDEX_COLUMN: &str = "";

/// Get the Arrow schema for `jobs_unique_data`, one row per respondent
#[must_use]
pub fn jobs_unique_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(PERSON_ID, DataType::Int64, false),
        Field::new(TOTAL_JOBS, DataType::Float64, true),
        Field::new(YEARS_JOB_HISTORY, DataType::Int64, false),
        Field::new(FEMALE, DataType::Int64, true),
        Field::new(GENDER, DataType::Utf8, true),
        Field::new(EDUCATION_CTG, DataType::Utf8, true),
        Field::new(FRAC_YEARS_PVT, DataType::Int64, true),
        Field::new(FRAC_YEARS_GVT, DataType::Int64, true),
        Field::new(FRAC_YEARS_SELF, DataType::Int64, true),
    ]))
}

/// Get the Arrow schema for `jobs_switch_data`, one row per respondent-year
#[must_use]
pub fn jobs_switch_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(PERSON_ID, DataType::Int64, false),
        Field::new(CALENDAR_YEAR, DataType::Int64, false),
        Field::new(AGE, DataType::Float64, true),
        Field::new(SWITCH_JOB_1, DataType::Float64, true),
        Field::new(SWITCH_JOB_2, DataType::Float64, true),
    ]))
}
