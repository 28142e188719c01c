//! Arrow schema definitions for the survey extracts and the derived tables
//!
//! Column names match the headers of the extract files exactly.

pub mod inputs;
pub mod outputs;

pub use inputs::{
    age_schema, education_schema, gender_schema, job_history_schema, job_type_schema,
    jobs_schema,
};
pub use outputs::{INDEX_COLUMN, jobs_switch_schema, jobs_unique_schema};

/// Column names shared by the extracts and the derived tables
pub mod columns {
    pub const PERSON_ID: &str = "Person_Id";
    pub const CALENDAR_YEAR: &str = "Calendar_Year";
    pub const JOB_ID: &str = "Job_ID";
    pub const TOTAL_JOBS: &str = "Total_Jobs";
    pub const SWITCH_JOB_1: &str = "Switch_Job_1";
    pub const SWITCH_JOB_2: &str = "Switch_Job_2";
    pub const GENDER: &str = "Gender";
    pub const MAX_EDUCATION: &str = "Max_Education";
    pub const JOB_TYPE: &str = "Job_Type";
    pub const AGE: &str = "Age";
    pub const YEARS_JOB_HISTORY: &str = "Years_Job_History";
    pub const FEMALE: &str = "Female";
    pub const EDUCATION_CTG: &str = "Education_Ctg";
    pub const FRAC_YEARS_PVT: &str = "Frac_Years_Pvt";
    pub const FRAC_YEARS_GVT: &str = "Frac_Years_Gvt";
    pub const FRAC_YEARS_SELF: &str = "Frac_Years_Self";
}
