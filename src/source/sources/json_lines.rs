use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::errors::SurveyError;
use crate::source::RecordSource;
use crate::transport::fs::{is_json_lines_file, read_json_lines};
use crate::types::SourceId;

/// Per-record transform applied once at load time (for example cleaning).
pub type RecordTransform<R> = Arc<dyn Fn(R) -> R + Send + Sync + 'static>;

/// Configuration for a JSON-lines record source.
#[derive(Clone)]
pub struct JsonLinesSourceConfig<R> {
    /// Stable source identifier attached to materialized tables.
    pub source_id: SourceId,
    /// Path of the `.jsonl` file, one decoded record object per line.
    pub path: PathBuf,
    /// Drop malformed lines with a warning instead of failing the load.
    pub skip_invalid_lines: bool,
    /// Optional transform applied to each record after decoding.
    pub transform: Option<RecordTransform<R>>,
}

impl<R> JsonLinesSourceConfig<R> {
    /// Create a config with an explicit id and file path.
    pub fn new(source_id: impl Into<SourceId>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
            skip_invalid_lines: false,
            transform: None,
        }
    }

    /// Override whether malformed lines are skipped.
    pub fn with_skip_invalid_lines(mut self, skip_invalid_lines: bool) -> Self {
        self.skip_invalid_lines = skip_invalid_lines;
        self
    }

    /// Set a per-record transform.
    pub fn with_transform(mut self, transform: RecordTransform<R>) -> Self {
        self.transform = Some(transform);
        self
    }
}

/// Record source backed by a JSON-lines file, read fully on open.
pub struct JsonLinesSource<R> {
    source_id: SourceId,
    records: Vec<R>,
}

impl<R: DeserializeOwned> JsonLinesSource<R> {
    /// Read and decode the file named by `config`.
    pub fn open(config: JsonLinesSourceConfig<R>) -> Result<Self, SurveyError> {
        if !config.path.is_file() {
            return Err(SurveyError::SourceUnavailable {
                source_id: config.source_id,
                reason: format!("file not found: {}", config.path.display()),
            });
        }
        if !is_json_lines_file(&config.path) {
            return Err(SurveyError::Configuration(format!(
                "source '{}' expects a .jsonl or .ndjson file, got {}",
                config.source_id,
                config.path.display()
            )));
        }
        let mut records: Vec<R> = read_json_lines(&config.path, config.skip_invalid_lines)?;
        if let Some(transform) = &config.transform {
            records = records.into_iter().map(|record| transform(record)).collect();
        }
        Ok(Self {
            source_id: config.source_id,
            records,
        })
    }
}

impl<R: Clone + Send + Sync> RecordSource<R> for JsonLinesSource<R> {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.records.len())
    }

    fn record_at(&self, idx: usize) -> Result<Option<R>, SurveyError> {
        Ok(self.records.get(idx).cloned())
    }
}
