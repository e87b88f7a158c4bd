//! Materialized record tables and the column/row selections used while
//! exploring them.

use std::ops::Range;

use crate::data::{FieldAccess, FieldValue, Keyed};
use crate::errors::SurveyError;
use crate::index::RecordIndex;
use crate::types::{CaseId, ColumnName, RecordPosition, SourceId};

/// A named column computed from existing fields.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedColumn {
    /// Name the column is exposed under (for example `totalwgt_kg`).
    pub name: ColumnName,
    /// One value per table row, `None` where inputs were missing.
    pub values: Vec<Option<f64>>,
}

/// Ordered, fully materialized collection of typed records.
#[derive(Clone, Debug)]
pub struct RecordTable<R> {
    source_id: SourceId,
    records: Vec<R>,
}

impl<R> RecordTable<R> {
    /// Wrap already-loaded records.
    pub fn new(source_id: impl Into<SourceId>, records: Vec<R>) -> Self {
        Self {
            source_id: source_id.into(),
            records,
        }
    }

    /// Identifier of the source the records came from.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// All records in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`, if any.
    pub fn get(&self, position: RecordPosition) -> Option<&R> {
        self.records.get(position)
    }

    /// First `n` rows, or the whole table when it is shorter.
    pub fn head(&self, n: usize) -> &[R] {
        &self.records[..n.min(self.records.len())]
    }

    /// Rows in `range`; the range must lie within the table.
    pub fn slice(&self, range: Range<RecordPosition>) -> Result<&[R], SurveyError> {
        self.records
            .get(range.clone())
            .ok_or(SurveyError::RowRange {
                start: range.start,
                end: range.end,
                len: self.records.len(),
            })
    }

    /// Compute a new column from every row.
    pub fn derive(
        &self,
        name: impl Into<ColumnName>,
        f: impl Fn(&R) -> Option<f64>,
    ) -> DerivedColumn {
        DerivedColumn {
            name: name.into(),
            values: self.records.iter().map(f).collect(),
        }
    }

    /// Consume the table, returning its records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R: Keyed> RecordTable<R> {
    /// Rows whose respondent key equals `key`, by linear scan.
    ///
    /// Unlike `RecordIndex::lookup`, an unknown key yields an empty result.
    pub fn filter_by_key(&self, key: CaseId) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| record.respondent_key() == key)
            .collect()
    }

    /// Build a respondent index over the current rows.
    pub fn record_index(&self) -> RecordIndex {
        RecordIndex::build(&self.records)
    }

    /// Rows for `key` through a previously built `index`.
    pub fn resolve(&self, index: &RecordIndex, key: CaseId) -> Result<Vec<&R>, SurveyError> {
        Ok(index.resolve(&self.records, key)?)
    }
}

impl<R: FieldAccess> RecordTable<R> {
    /// Column names in declaration order.
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// Name of the column at `idx`.
    pub fn column_name_at(&self, idx: usize) -> Option<&'static str> {
        R::COLUMNS.get(idx).copied()
    }

    /// Every value of column `name`, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<FieldValue>, SurveyError> {
        Self::ensure_column(name)?;
        Ok(self
            .records
            .iter()
            .map(|record| record.field(name).unwrap_or(FieldValue::Missing))
            .collect())
    }

    /// Single cell at `position` in column `name`.
    pub fn value(&self, position: RecordPosition, name: &str) -> Result<FieldValue, SurveyError> {
        Self::ensure_column(name)?;
        let record = self.records.get(position).ok_or(SurveyError::RowRange {
            start: position,
            end: position + 1,
            len: self.records.len(),
        })?;
        Ok(record.field(name).unwrap_or(FieldValue::Missing))
    }

    /// Values of column `name` at the given row positions, in the order given.
    pub fn column_at_positions(
        &self,
        name: &str,
        positions: &[RecordPosition],
    ) -> Result<Vec<FieldValue>, SurveyError> {
        positions
            .iter()
            .map(|&position| self.value(position, name))
            .collect()
    }

    fn ensure_column(name: &str) -> Result<(), SurveyError> {
        if R::COLUMNS.contains(&name) {
            Ok(())
        } else {
            Err(SurveyError::UnknownColumn(name.to_string()))
        }
    }
}
