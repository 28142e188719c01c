//! Gender features

use std::fmt;

use crate::models::{GenderRecord, PersonId};

/// Raw gender code reported for male respondents
pub const MALE_CODE: f64 = 1.0;

/// Display label for the binary gender flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderLabel {
    Male,
    Female,
}

impl GenderLabel {
    /// Label for a `Female` flag value
    #[must_use]
    pub const fn from_female(female: i64) -> Self {
        if female == 0 { Self::Male } else { Self::Female }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived gender columns for one respondent
#[derive(Debug, Clone, PartialEq)]
pub struct GenderFeature {
    pub person_id: PersonId,
    /// 0 for male, 1 otherwise
    pub female: i64,
    pub label: GenderLabel,
}

/// `Female` flag for a raw code; anything other than the male code, including
/// a missing code, counts as female
#[must_use]
pub fn female_flag(code: Option<f64>) -> i64 {
    i64::from(code != Some(MALE_CODE))
}

/// Derive `Female` and `Gender` for every row of `gender_data`
#[must_use]
pub fn gender_features(records: &[GenderRecord]) -> Vec<GenderFeature> {
    records
        .iter()
        .map(|record| {
            let female = female_flag(record.gender);
            GenderFeature {
                person_id: record.person_id,
                female,
                label: GenderLabel::from_female(female),
            }
        })
        .collect()
}
