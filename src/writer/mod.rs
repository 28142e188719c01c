//! Writing the derived tables
//!
//! Tables are serialized to a `RecordBatch` through their declared schema and
//! written as CSV or Parquet. Existing files are overwritten.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{ArrayRef, Int64Array};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::config::{FeatureConfig, OutputFormat};
use crate::error::Result;
use crate::error::util::{ensure_directory, safe_create_file};
use crate::models::ArrowSchema;
use crate::schema::INDEX_COLUMN;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Prepend a positional index column (0..n) to `batch`
pub fn with_index_column(batch: &RecordBatch) -> Result<RecordBatch> {
    let rows = i64::try_from(batch.num_rows()).unwrap_or(i64::MAX);
    let index: ArrayRef = Arc::new(Int64Array::from_iter_values(0..rows));

    let mut fields = vec![Arc::new(Field::new(INDEX_COLUMN, DataType::Int64, false))];
    fields.extend(batch.schema().fields().iter().cloned());

    let mut columns = Vec::with_capacity(batch.num_columns() + 1);
    columns.push(index);
    columns.extend(batch.columns().iter().cloned());

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Write `batch` as CSV with a header row; missing values become empty cells
pub fn write_csv(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = safe_create_file(path, "writing CSV output")?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    Ok(())
}

/// Write `batch` as a single-row-group Parquet file
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = safe_create_file(path, "writing Parquet output")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

/// Write typed rows to `<output_dir>/<stem>.<ext>` according to `config`
///
/// The positional index column is only added to CSV output.
///
/// # Returns
/// The path that was written
pub fn write_table<T: ArrowSchema>(rows: &[T], stem: &str, config: &FeatureConfig) -> Result<PathBuf> {
    let start = Instant::now();
    let path = config.output_path(stem);
    log_operation_start("Writing table", &path);

    ensure_directory(&config.output_dir)?;
    let batch = T::to_record_batch(rows)?;

    match config.output_format {
        OutputFormat::Csv if config.write_index => write_csv(&with_index_column(&batch)?, &path)?,
        OutputFormat::Csv => write_csv(&batch, &path)?,
        OutputFormat::Parquet => write_parquet(&batch, &path)?,
    }

    log_operation_complete("wrote", &path, rows.len(), Some(start.elapsed()));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobsSwitchRow;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use std::fs;

    fn rows() -> Vec<JobsSwitchRow> {
        vec![
            JobsSwitchRow {
                person_id: 1,
                calendar_year: 2010,
                age: Some(30.0),
                switch_job_1: Some(0.0),
                switch_job_2: None,
            },
            JobsSwitchRow {
                person_id: 1,
                calendar_year: 2011,
                age: None,
                switch_job_1: Some(1.0),
                switch_job_2: Some(1.0),
            },
        ]
    }

    #[test]
    fn test_index_column_is_prepended() {
        let batch = JobsSwitchRow::to_record_batch(&rows()).unwrap();
        let indexed = with_index_column(&batch).unwrap();

        assert_eq!(indexed.num_columns(), batch.num_columns() + 1);
        assert_eq!(indexed.schema().field(0).name(), INDEX_COLUMN);
        let index = indexed
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(index.values().to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_csv_output_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = FeatureConfig::default().with_output_dir(dir.path().join("processed"));

        let path = write_table(&rows(), "jobs_switch_data", &config).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines[0],
            ",Person_Id,Calendar_Year,Age,Switch_Job_1,Switch_Job_2"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0,1,2010,"));
        assert!(lines[2].starts_with("1,1,2011,,"));
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FeatureConfig::default()
            .with_output_dir(dir.path())
            .with_index(false);
        fs::write(config.output_path("jobs_switch_data"), "stale\nstale\nstale\nstale\n").unwrap();

        let path = write_table(&rows(), "jobs_switch_data", &config).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with("Person_Id,"));
    }

    #[test]
    fn test_parquet_output_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = FeatureConfig::default()
            .with_output_dir(dir.path())
            .with_output_format(OutputFormat::Parquet);

        let path = write_table(&rows(), "jobs_switch_data", &config).unwrap();
        let file = fs::File::open(path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.collect::<std::result::Result<_, _>>().unwrap();

        let decoded = JobsSwitchRow::from_record_batches(&batches).unwrap();
        assert_eq!(decoded, rows());
    }
}
