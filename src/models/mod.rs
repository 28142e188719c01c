//! Record models for the survey extracts and the derived tables
//!
//! Each model is a plain serde struct whose field names are renamed to the
//! extract column headers, so conversion to and from Arrow is a single
//! `serde_arrow` call.

pub mod extracts;
pub mod features;
pub mod traits;

pub use extracts::{
    AgeRecord, EducationRecord, GenderRecord, JobHistoryRecord, JobRecord, JobTypeRecord,
};
pub use features::{JobsSwitchRow, JobsUniqueRow};
pub use traits::{ArrowSchema, PersonId, PersonKeyed};

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float64Array, Int64Array, StringArray};

    #[test]
    fn test_unique_rows_to_batch_keeps_nulls() {
        let mut row = JobsUniqueRow::new(7, Some(3.0), 4);
        row.gender = Some("Male".to_string());
        row.female = Some(0);
        let rows = vec![row, JobsUniqueRow::new(8, None, 1)];

        let batch = JobsUniqueRow::to_record_batch(&rows).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.schema(), JobsUniqueRow::schema());

        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(ids.value(1), 8);

        let total_jobs = batch
            .column(1)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert!(total_jobs.is_null(1));

        let gender = batch
            .column(4)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(gender.value(0), "Male");
        assert!(gender.is_null(1));
    }

    #[test]
    fn test_extract_rows_from_batches() {
        let records = vec![
            JobHistoryRecord {
                person_id: 1,
                job_id: 100,
                calendar_year: 2010,
            },
            JobHistoryRecord {
                person_id: 1,
                job_id: 101,
                calendar_year: 2011,
            },
        ];
        let first = JobHistoryRecord::to_record_batch(&records[..1]).unwrap();
        let second = JobHistoryRecord::to_record_batch(&records[1..]).unwrap();

        let decoded = JobHistoryRecord::from_record_batches(&[first, second]).unwrap();
        assert_eq!(decoded, records);
    }
}
