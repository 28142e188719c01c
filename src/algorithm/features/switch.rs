//! Job switching table

use super::join::left_join;
use crate::models::{AgeRecord, JobRecord, JobsSwitchRow};

/// Pair every `jobs_data` row with the respondent's age in that year
///
/// Keeps the per-year granularity of `jobs_data`. With at most one age row per
/// respondent-year the row count equals the number of job records; a year
/// without an age row gets `Age = None`.
#[must_use]
pub fn job_switch_table(jobs: &[JobRecord], ages: &[AgeRecord]) -> Vec<JobsSwitchRow> {
    let switches: Vec<JobsSwitchRow> = jobs
        .iter()
        .map(|job| JobsSwitchRow {
            person_id: job.person_id,
            calendar_year: job.calendar_year,
            age: None,
            switch_job_1: job.switch_job_1,
            switch_job_2: job.switch_job_2,
        })
        .collect();

    left_join(
        switches,
        ages,
        |row| (row.person_id, row.calendar_year),
        |age| (age.person_id, age.calendar_year),
    )
    .into_iter()
    .map(|(mut row, age)| {
        row.age = age.and_then(|a| a.age);
        row
    })
    .collect()
}
