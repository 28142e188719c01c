//! Education categories
//!
//! Years of education are bucketed by ordered bands; the first matching
//! band wins.

use std::fmt;

use crate::models::{EducationRecord, PersonId};

/// Four-way education category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EducationCategory {
    LessSchool,
    CompleteSchool,
    College,
    Graduate,
}

impl EducationCategory {
    /// Classify years of education
    ///
    /// Returns `None` for missing or NaN input and for fractional values that
    /// fall between bands (for example 14.5).
    #[must_use]
    pub fn classify(years: Option<f64>) -> Option<Self> {
        match years.filter(|y| !y.is_nan())? {
            y if y < 12.0 => Some(Self::LessSchool),
            y if (12.0..=14.0).contains(&y) => Some(Self::CompleteSchool),
            y if (15.0..=16.0).contains(&y) => Some(Self::College),
            y if y >= 17.0 => Some(Self::Graduate),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessSchool => "Less_School",
            Self::CompleteSchool => "Complete_School",
            Self::College => "College",
            Self::Graduate => "Graduate",
        }
    }

    /// All categories in band order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::LessSchool,
            Self::CompleteSchool,
            Self::College,
            Self::Graduate,
        ]
    }
}

impl fmt::Display for EducationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Education category for one respondent
#[derive(Debug, Clone, PartialEq)]
pub struct EducationFeature {
    pub person_id: PersonId,
    pub category: Option<EducationCategory>,
}

/// Classify every row of `highest_grade_completed_data`
#[must_use]
pub fn education_features(records: &[EducationRecord]) -> Vec<EducationFeature> {
    let features: Vec<EducationFeature> = records
        .iter()
        .map(|record| EducationFeature {
            person_id: record.person_id,
            category: EducationCategory::classify(record.max_education),
        })
        .collect();

    let unclassified = features.iter().filter(|f| f.category.is_none()).count();
    if unclassified > 0 {
        log::warn!(
            "{unclassified} respondents have Max_Education outside every category; Education_Ctg left empty"
        );
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (11.0, EducationCategory::LessSchool),
            (12.0, EducationCategory::CompleteSchool),
            (14.0, EducationCategory::CompleteSchool),
            (15.0, EducationCategory::College),
            (16.0, EducationCategory::College),
            (17.0, EducationCategory::Graduate),
            (25.0, EducationCategory::Graduate),
            (-1.0, EducationCategory::LessSchool),
            (0.0, EducationCategory::LessSchool),
        ];
        for (years, expected) in cases {
            assert_eq!(
                EducationCategory::classify(Some(years)),
                Some(expected),
                "years = {years}"
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(EducationCategory::LessSchool.as_str(), "Less_School");
        assert_eq!(EducationCategory::CompleteSchool.as_str(), "Complete_School");
        assert_eq!(EducationCategory::College.to_string(), "College");
        assert_eq!(EducationCategory::Graduate.to_string(), "Graduate");
    }

    #[test]
    fn test_unclassifiable_values() {
        assert_eq!(EducationCategory::classify(None), None);
        assert_eq!(EducationCategory::classify(Some(f64::NAN)), None);
        assert_eq!(EducationCategory::classify(Some(14.5)), None);
        assert_eq!(EducationCategory::classify(Some(16.5)), None);
    }

    #[test]
    fn test_integer_years_are_always_classified() {
        for years in -5..=30 {
            let category = EducationCategory::classify(Some(f64::from(years)));
            assert!(category.is_some(), "years = {years}");
        }
    }
}
