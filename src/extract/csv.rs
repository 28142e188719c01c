//! CSV extract reading
//!
//! Extract files are matched to their declared schema by header name, not by
//! position: the header is read first, declared columns get their declared
//! type, undeclared columns are projected away without being parsed.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::error::util::safe_open_file;
use crate::error::{FeatureError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Build the schema of the file as laid out on disk, plus the projection
/// that yields the declared columns in declared order
///
/// # Errors
/// Returns a schema error if a declared column is absent from the header
pub fn resolve_columns(
    header: &Schema,
    declared: &Schema,
    path: &Path,
) -> Result<(Schema, Vec<usize>)> {
    let file_fields = header
        .fields()
        .iter()
        .map(|column| match declared.field_with_name(column.name()) {
            Ok(field) => field.clone(),
            Err(_) => Field::new(column.name(), DataType::Utf8, true),
        })
        .collect_vec();

    let projection = declared
        .fields()
        .iter()
        .map(|field| {
            header.index_of(field.name()).map_err(|_| {
                FeatureError::schema(format!(
                    "Column '{}' not found in {}",
                    field.name(),
                    path.display()
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let ignored = header.fields().len() - projection.len();
    if ignored > 0 {
        log::debug!(
            "Ignoring {ignored} undeclared columns in {}",
            path.display()
        );
    }

    Ok((Schema::new(file_fields), projection))
}

/// Read a CSV extract into Arrow record batches using `schema`
///
/// # Arguments
/// * `path` - Path to the CSV file (header row required)
/// * `schema` - Declared columns and types
/// * `batch_size` - Rows per record batch
/// * `delimiter` - Field delimiter
///
/// # Returns
/// Record batches whose schema equals `schema`
///
/// # Errors
/// Returns an error if the file is missing, a declared column is absent, a
/// value does not parse, or a non-nullable column has an empty cell
pub fn read_csv_extract(
    path: &Path,
    schema: &SchemaRef,
    batch_size: usize,
    delimiter: u8,
) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading extract", path);

    let mut file = safe_open_file(path, "reading survey extract")?;
    let format = Format::default()
        .with_header(true)
        .with_delimiter(delimiter);

    let (header, _) = format.infer_schema(&mut file, Some(0))?;
    file.rewind()?;

    let (file_schema, projection) = resolve_columns(&header, schema, path)?;

    let reader = ReaderBuilder::new(Arc::new(file_schema))
        .with_format(format)
        .with_batch_size(batch_size)
        .with_projection(projection)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();

    if rows == 0 {
        log_warning("Extract contains no rows", Some(path));
    }
    log_operation_complete("read", path, rows, Some(start.elapsed()));

    Ok(batches)
}
