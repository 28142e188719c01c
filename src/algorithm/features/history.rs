//! Years of employment history per respondent

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::{JobRecord, JobsUniqueRow, PersonId, PersonKeyed};

/// Count rows per respondent
pub fn count_by_person<T: PersonKeyed>(rows: &[T]) -> FxHashMap<PersonId, i64> {
    let mut counts: FxHashMap<PersonId, i64> = FxHashMap::default();
    for row in rows {
        *counts.entry(row.person_id()).or_insert(0) += 1;
    }
    counts
}

/// Collapse `jobs_data` to one row per respondent
///
/// Each respondent's row count in `jobs_data` becomes `Years_Job_History`.
/// Rows are then made unique on (`Person_Id`, `Total_Jobs`,
/// `Years_Job_History`), keeping first-occurrence order. `Total_Jobs` is
/// constant per respondent in well-formed extracts, so this is one row each.
#[must_use]
pub fn years_of_history(jobs: &[JobRecord]) -> Vec<JobsUniqueRow> {
    let counts = count_by_person(jobs);

    jobs.iter()
        .map(|job| {
            let years = counts.get(&job.person_id).copied().unwrap_or_default();
            JobsUniqueRow::new(job.person_id, job.total_jobs, years)
        })
        .unique_by(|row| {
            (
                row.person_id,
                row.total_jobs.map(f64::to_bits),
                row.years_job_history,
            )
        })
        .collect()
}
