//! Record source interfaces and materialization.
//!
//! Ownership model:
//! - `RecordSource` exposes stable, index-based access into a record
//!   collection owned by a loader.
//! - `materialize` copies a source into a caller-owned `RecordTable`, the only
//!   structure a `RecordIndex` is built from.

use tracing::debug;

use crate::errors::SurveyError;
use crate::table::RecordTable;
use crate::types::SourceId;

/// Source implementation modules.
pub mod sources;

pub use sources::json_lines::{JsonLinesSource, JsonLinesSourceConfig, RecordTransform};

/// Index-addressable record source.
///
/// `len_hint` must be stable while a caller materializes the source, and
/// `record_at` must return the record corresponding to the same index across
/// calls. Indices run over `0..len_hint`.
pub trait RecordSource<R>: Send + Sync {
    /// Stable source identifier.
    fn id(&self) -> &str;
    /// Total number of records, when known.
    fn len_hint(&self) -> Option<usize>;
    /// Return the record at index `idx`, or `None` for sparse/missing positions.
    fn record_at(&self, idx: usize) -> Result<Option<R>, SurveyError>;
}

/// Load every record from `source` into a table, in index order.
///
/// Sparse positions are skipped, so table positions are dense even when the
/// source's are not.
pub fn materialize<R>(source: &dyn RecordSource<R>) -> Result<RecordTable<R>, SurveyError> {
    let total = source
        .len_hint()
        .ok_or_else(|| SurveyError::SourceInconsistent {
            source_id: source.id().to_string(),
            details: "record source did not provide len_hint".into(),
        })?;
    let mut records = Vec::with_capacity(total);
    let mut skipped = 0usize;
    for idx in 0..total {
        match source.record_at(idx)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    debug!(
        source_id = source.id(),
        total,
        loaded = records.len(),
        skipped,
        "materialized record source"
    );
    Ok(RecordTable::new(source.id(), records))
}

/// In-memory record source for tests and small datasets.
pub struct InMemorySource<R> {
    id: SourceId,
    records: Vec<R>,
}

impl<R> InMemorySource<R> {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<R>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl<R: Clone + Send + Sync> RecordSource<R> for InMemorySource<R> {
    fn id(&self) -> &str {
        &self.id
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.records.len())
    }

    fn record_at(&self, idx: usize) -> Result<Option<R>, SurveyError> {
        Ok(self.records.get(idx).cloned())
    }
}
