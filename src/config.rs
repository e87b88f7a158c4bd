use std::path::PathBuf;

use crate::constants::explore::{
    DEFAULT_CASEID, DEFAULT_HEAD_ROWS, DEFAULT_PREG_PATHS, DEFAULT_RESP_PATHS,
};
use crate::types::CaseId;

/// Settings for an exploration session over the pregnancy and respondent files.
#[derive(Clone, Debug, PartialEq)]
pub struct ExploreConfig {
    /// Pregnancy file (`.jsonl`, one decoded record per line).
    pub pregnancy_path: PathBuf,
    /// Respondent file; respondent queries are skipped when absent.
    pub respondent_path: Option<PathBuf>,
    /// Respondent whose pregnancies are looked up through the index.
    pub caseid: CaseId,
    /// Rows printed by the `head` preview.
    pub head_rows: usize,
    /// Drop malformed lines with a warning instead of failing the load.
    pub skip_invalid_lines: bool,
    /// Apply NSFG cleaning (age rescale, sentinel codes, total weight) on load.
    pub clean: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            pregnancy_path: PathBuf::from(DEFAULT_PREG_PATHS[0]),
            respondent_path: Some(PathBuf::from(DEFAULT_RESP_PATHS[0])),
            caseid: DEFAULT_CASEID,
            head_rows: DEFAULT_HEAD_ROWS,
            skip_invalid_lines: false,
            clean: true,
        }
    }
}
