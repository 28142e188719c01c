//! Trait definitions for record models
//!
//! Every extract row and derived row converts to and from Arrow `RecordBatch`
//! through `serde_arrow`, using the declared schemas in [`crate::schema`].

use crate::error::Result;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

/// Respondent identifier
pub type PersonId = i64;

/// A trait for models that can be converted to and from Arrow `RecordBatch`.
pub trait ArrowSchema: Sized {
    /// Get the Arrow schema for this model
    fn schema() -> SchemaRef;

    /// Convert a `RecordBatch` to a vector of this model
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;

    /// Convert a slice of this model to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch>;

    /// Convert several batches, preserving row order across batches
    fn from_record_batches(batches: &[RecordBatch]) -> Result<Vec<Self>> {
        let total = batches.iter().map(RecordBatch::num_rows).sum();
        let mut models = Vec::with_capacity(total);
        for batch in batches {
            models.extend(Self::from_record_batch(batch)?);
        }
        Ok(models)
    }
}

/// Rows that belong to a single respondent
pub trait PersonKeyed {
    /// The respondent this row describes
    fn person_id(&self) -> PersonId;
}

/// Implement [`ArrowSchema`] for a serde model against a declared schema
macro_rules! impl_arrow_schema {
    ($model:ty, $schema_fn:path) => {
        impl $crate::models::traits::ArrowSchema for $model {
            fn schema() -> ::arrow::datatypes::SchemaRef {
                $schema_fn()
            }

            fn from_record_batch(
                batch: &::arrow::record_batch::RecordBatch,
            ) -> $crate::error::Result<Vec<Self>> {
                Ok(::serde_arrow::from_record_batch(batch)?)
            }

            fn to_record_batch(
                models: &[Self],
            ) -> $crate::error::Result<::arrow::record_batch::RecordBatch> {
                let fields = Self::schema().fields().to_vec();
                Ok(::serde_arrow::to_record_batch(&fields, &models)?)
            }
        }
    };
}

/// Implement [`PersonKeyed`] for models with a `person_id` field
macro_rules! impl_person_keyed {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::models::traits::PersonKeyed for $model {
                fn person_id(&self) -> $crate::models::traits::PersonId {
                    self.person_id
                }
            }
        )+
    };
}

pub(crate) use impl_arrow_schema;
pub(crate) use impl_person_keyed;
