//! Job category fractions
//!
//! Each job a respondent held is labelled Pvt, Gvt or Other from its type
//! code. For every respondent-year the set of labels held that year is
//! counted once, and the per-label year counts are turned into percentages of
//! the years present in the job history.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashSet;

use super::join::left_join;
use crate::models::{JobHistoryRecord, JobTypeRecord, PersonId};

/// Job type codes labelled as private-sector jobs
pub const PRIVATE_CODES: [f64; 2] = [1.0, 5.0];
/// Job type code labelled as a government job
pub const GOVERNMENT_CODE: f64 = 2.0;

/// Three-way job category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCategory {
    Gvt,
    Pvt,
    /// Self-employed or unclassified, including jobs with no type code
    Other,
}

impl JobCategory {
    /// Label a job type code
    #[must_use]
    pub fn from_code(code: Option<f64>) -> Self {
        match code {
            Some(c) if PRIVATE_CODES.contains(&c) => Self::Pvt,
            Some(c) if c == GOVERNMENT_CODE => Self::Gvt,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gvt => "Gvt",
            Self::Pvt => "Pvt",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single type code kept for a job
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedJobType {
    pub person_id: PersonId,
    pub job_id: i64,
    /// Largest reported code; `None` when every report was missing
    pub job_type: Option<f64>,
}

/// Reduce `job_type_data` to one row per (`Person_Id`, `Job_ID`), keeping the
/// maximum code. Rows come out sorted by key.
#[must_use]
pub fn reduce_job_types(records: &[JobTypeRecord]) -> Vec<ReducedJobType> {
    let mut max_codes: BTreeMap<(PersonId, i64), Option<f64>> = BTreeMap::new();

    for record in records {
        let code = record.job_type.filter(|c| !c.is_nan());
        let entry = max_codes
            .entry((record.person_id, record.job_id))
            .or_insert(None);
        *entry = match (*entry, code) {
            (Some(current), Some(code)) => Some(current.max(code)),
            (None, code) => code,
            (current, None) => current,
        };
    }

    max_codes
        .into_iter()
        .map(|((person_id, job_id), job_type)| ReducedJobType {
            person_id,
            job_id,
            job_type,
        })
        .collect()
}

/// One-hot category indicators for a job-year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryIndicators {
    pub gvt: bool,
    pub pvt: bool,
    pub other: bool,
}

impl From<JobCategory> for CategoryIndicators {
    fn from(category: JobCategory) -> Self {
        Self {
            gvt: category == JobCategory::Gvt,
            pvt: category == JobCategory::Pvt,
            other: category == JobCategory::Other,
        }
    }
}

/// Category indicators of a job held in a calendar year
#[derive(Debug, Clone, PartialEq)]
pub struct JobYearCategory {
    pub person_id: PersonId,
    pub calendar_year: i64,
    pub job_id: i64,
    pub category: JobCategory,
}

/// Attach the reduced job type to every job-history row and label it
#[must_use]
pub fn categorize_job_history(
    history: &[JobHistoryRecord],
    job_types: &[ReducedJobType],
) -> Vec<JobYearCategory> {
    left_join(
        history.to_vec(),
        job_types,
        |h| (h.person_id, h.job_id),
        |t| (t.person_id, t.job_id),
    )
    .into_iter()
    .map(|(record, job_type)| JobYearCategory {
        person_id: record.person_id,
        calendar_year: record.calendar_year,
        job_id: record.job_id,
        category: JobCategory::from_code(job_type.and_then(|t| t.job_type)),
    })
    .collect()
}

/// Year counts per category for one respondent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryYears {
    pub person_id: PersonId,
    /// Distinct calendar years present in the job history
    pub years_job_history: i64,
    pub years_gvt_job: i64,
    pub years_pvt_job: i64,
    pub years_self_job: i64,
}

/// Count years per category for every respondent, sorted by respondent
///
/// Indicator rows are made unique on (`Person_Id`, `Calendar_Year`,
/// indicators) first, so several jobs of one category in the same year
/// count that year once.
#[must_use]
pub fn category_years(job_years: &[JobYearCategory]) -> Vec<CategoryYears> {
    let unique_rows = job_years
        .iter()
        .map(|row| {
            (
                row.person_id,
                row.calendar_year,
                CategoryIndicators::from(row.category),
            )
        })
        .unique()
        .collect_vec();

    let mut by_person: BTreeMap<PersonId, (FxHashSet<i64>, CategoryYears)> = BTreeMap::new();
    for (person_id, year, indicators) in unique_rows {
        let (years, counts) = by_person.entry(person_id).or_insert_with(|| {
            (
                FxHashSet::default(),
                CategoryYears {
                    person_id,
                    years_job_history: 0,
                    years_gvt_job: 0,
                    years_pvt_job: 0,
                    years_self_job: 0,
                },
            )
        });
        years.insert(year);
        counts.years_gvt_job += i64::from(indicators.gvt);
        counts.years_pvt_job += i64::from(indicators.pvt);
        counts.years_self_job += i64::from(indicators.other);
    }

    by_person
        .into_values()
        .map(|(years, mut counts)| {
            counts.years_job_history = years.len() as i64;
            counts
        })
        .collect()
}

/// Percentage of `total` that `part` represents, rounded half to even
///
/// Returns `None` when `total` is zero.
#[must_use]
pub fn percentage(part: i64, total: i64) -> Option<i64> {
    if total == 0 {
        return None;
    }
    let share = 100.0 * (part as f64 / total as f64);
    Some(share.round_ties_even() as i64)
}

/// Fractions of working years per category for one respondent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFractions {
    pub person_id: PersonId,
    pub frac_years_pvt: Option<i64>,
    pub frac_years_gvt: Option<i64>,
    pub frac_years_self: Option<i64>,
}

impl From<&CategoryYears> for CategoryFractions {
    fn from(years: &CategoryYears) -> Self {
        Self {
            person_id: years.person_id,
            frac_years_pvt: percentage(years.years_pvt_job, years.years_job_history),
            frac_years_gvt: percentage(years.years_gvt_job, years.years_job_history),
            frac_years_self: percentage(years.years_self_job, years.years_job_history),
        }
    }
}

/// Run the whole job category derivation from the two extracts
#[must_use]
pub fn job_category_fractions(
    job_types: &[JobTypeRecord],
    history: &[JobHistoryRecord],
) -> Vec<CategoryFractions> {
    let reduced = reduce_job_types(job_types);
    let job_years = categorize_job_history(history, &reduced);
    category_years(&job_years)
        .iter()
        .map(CategoryFractions::from)
        .collect()
}
