//! Loaders for the survey extracts
//!
//! Every extract is a header-row CSV file named after the extract in the input
//! directory. Available extracts:
//! - `jobs_data`: employment years, total jobs and job switch flags
//! - `gender_data`: raw gender code
//! - `highest_grade_completed_data`: years of education
//! - `job_type_data`: type codes reported for each job
//! - `job_history_data`: jobs held per calendar year
//! - `age_data`: age per calendar year

pub mod csv;

use std::path::{Path, PathBuf};

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use serde::de::DeserializeOwned;

use crate::config::FeatureConfig;
use crate::error::Result;
use crate::error::util::validate_directory;
use crate::models::{
    AgeRecord, ArrowSchema, EducationRecord, GenderRecord, JobHistoryRecord, JobRecord,
    JobTypeRecord,
};

/// Base trait for extract loaders
pub trait ExtractLoader {
    /// Typed row of this extract
    type Record: ArrowSchema + DeserializeOwned;

    /// Get the name of the extract (the file stem)
    fn get_extract_name(&self) -> &'static str;

    /// Get the schema for this extract
    fn get_schema(&self) -> SchemaRef {
        Self::Record::schema()
    }

    /// Path of the extract file inside `input_dir`
    fn file_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(format!("{}.csv", self.get_extract_name()))
    }

    /// Load the extract as record batches
    fn load(&self, config: &FeatureConfig) -> Result<Vec<RecordBatch>> {
        csv::read_csv_extract(
            &self.file_path(&config.input_dir),
            &self.get_schema(),
            config.batch_size,
            config.delimiter,
        )
    }

    /// Load the extract as typed rows, in file order
    fn load_records(&self, config: &FeatureConfig) -> Result<Vec<Self::Record>> {
        let batches = self.load(config)?;
        Self::Record::from_record_batches(&batches)
    }
}

/// Define a unit-struct loader for an extract
macro_rules! define_extract {
    ($(#[$meta:meta])* $loader:ident, $name:literal, $record:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $loader;

        impl ExtractLoader for $loader {
            type Record = $record;

            fn get_extract_name(&self) -> &'static str {
                $name
            }
        }
    };
}

define_extract!(
    /// Loader for `jobs_data`
    JobsExtract,
    "jobs_data",
    JobRecord
);
define_extract!(
    /// Loader for `gender_data`
    GenderExtract,
    "gender_data",
    GenderRecord
);
define_extract!(
    /// Loader for `highest_grade_completed_data`
    EducationExtract,
    "highest_grade_completed_data",
    EducationRecord
);
define_extract!(
    /// Loader for `job_type_data`
    JobTypeExtract,
    "job_type_data",
    JobTypeRecord
);
define_extract!(
    /// Loader for `job_history_data`
    JobHistoryExtract,
    "job_history_data",
    JobHistoryRecord
);
define_extract!(
    /// Loader for `age_data`
    AgeExtract,
    "age_data",
    AgeRecord
);

/// All six extracts held in memory
#[derive(Debug, Clone, Default)]
pub struct FeatureInputs {
    pub jobs: Vec<JobRecord>,
    pub gender: Vec<GenderRecord>,
    pub education: Vec<EducationRecord>,
    pub job_types: Vec<JobTypeRecord>,
    pub job_history: Vec<JobHistoryRecord>,
    pub ages: Vec<AgeRecord>,
}

impl FeatureInputs {
    /// Read every extract from `config.input_dir`
    ///
    /// # Errors
    /// Fails on the first extract that is missing or does not parse
    pub fn load(config: &FeatureConfig) -> Result<Self> {
        validate_directory(&config.input_dir, "survey extracts")?;
        log::info!("Loading survey extracts from {}", config.input_dir.display());

        Ok(Self {
            jobs: JobsExtract.load_records(config)?,
            gender: GenderExtract.load_records(config)?,
            education: EducationExtract.load_records(config)?,
            job_types: JobTypeExtract.load_records(config)?,
            job_history: JobHistoryExtract.load_records(config)?,
            ages: AgeExtract.load_records(config)?,
        })
    }

    /// Total number of rows across all extracts
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.jobs.len()
            + self.gender.len()
            + self.education.len()
            + self.job_types.len()
            + self.job_history.len()
            + self.ages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_file_names() {
        let dir = Path::new("data/interim");
        assert_eq!(
            EducationExtract.file_path(dir),
            PathBuf::from("data/interim/highest_grade_completed_data.csv")
        );
        assert_eq!(JobsExtract.get_extract_name(), "jobs_data");
        assert_eq!(AgeExtract.get_schema().fields().len(), 3);
    }

    #[test]
    fn test_load_typed_records() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("job_type_data.csv"),
            "Person_Id,Job_ID,Job_Type\n1,100,1.0\n1,100,\n2,200,2\n",
        )
        .unwrap();
        let config = FeatureConfig::default().with_input_dir(dir.path());

        let records = JobTypeExtract.load_records(&config).unwrap();
        assert_eq!(
            records,
            vec![
                JobTypeRecord {
                    person_id: 1,
                    job_id: 100,
                    job_type: Some(1.0)
                },
                JobTypeRecord {
                    person_id: 1,
                    job_id: 100,
                    job_type: None
                },
                JobTypeRecord {
                    person_id: 2,
                    job_id: 200,
                    job_type: Some(2.0)
                },
            ]
        );
    }

    #[test]
    fn test_missing_input_dir() {
        let config = FeatureConfig::default().with_input_dir("/nonexistent/interim");
        assert!(FeatureInputs::load(&config).is_err());
    }
}
