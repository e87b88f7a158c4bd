use std::io;

use thiserror::Error;

use crate::types::{CaseId, ColumnName, PathString, RecordPosition, SourceId};

/// Failures raised by `RecordIndex` lookups and resolves.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("respondent key {key} is not present in the record index")]
    KeyNotFound { key: CaseId },
    /// The indexed collection was mutated after the index was built.
    #[error(
        "record position {position} for respondent key {key} is out of range for {len} records"
    )]
    IndexOutOfRange {
        key: CaseId,
        position: RecordPosition,
        len: usize,
    },
}

/// Error type for record loading, table access, and index failures.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("record source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("record source '{source_id}' returned inconsistent state: {details}")]
    SourceInconsistent {
        source_id: SourceId,
        details: String,
    },
    #[error("malformed record at {path}:{line}: {reason}")]
    MalformedRecord {
        path: PathString,
        line: usize,
        reason: String,
    },
    #[error("unknown column '{0}'")]
    UnknownColumn(ColumnName),
    #[error("row range {start}..{end} is out of bounds for {len} rows")]
    RowRange {
        start: RecordPosition,
        end: RecordPosition,
        len: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
