use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::constants::transport::JSON_LINES_EXTENSIONS;
use crate::errors::SurveyError;

/// True if the path has a `.jsonl` or `.ndjson` extension (case-insensitive).
pub fn is_json_lines_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            JSON_LINES_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read one JSON object per line from `path`.
///
/// Blank lines are ignored. A line that fails to deserialize is an error
/// unless `skip_malformed` is set, in which case it is logged and dropped.
/// Line numbers in errors are 1-based.
pub fn read_json_lines<R: DeserializeOwned>(
    path: &Path,
    skip_malformed: bool,
) -> Result<Vec<R>, SurveyError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<R>(trimmed) {
            Ok(record) => records.push(record),
            Err(err) if skip_malformed => {
                skipped += 1;
                warn!(
                    path = %path.display(),
                    line = idx + 1,
                    error = %err,
                    "skipping malformed record line"
                );
            }
            Err(err) => {
                return Err(SurveyError::MalformedRecord {
                    path: path.display().to_string(),
                    line: idx + 1,
                    reason: err.to_string(),
                });
            }
        }
    }
    debug!(
        path = %path.display(),
        records = records.len(),
        skipped,
        "read json lines"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RespondentRecord;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_lines_extension_check_is_case_insensitive() {
        assert!(is_json_lines_file(Path::new("a/2002FemPreg.jsonl")));
        assert!(is_json_lines_file(Path::new("resp.NDJSON")));
        assert!(!is_json_lines_file(Path::new("2002FemPreg.dat.gz")));
        assert!(!is_json_lines_file(Path::new("no_extension")));
    }

    #[test]
    fn reads_records_and_ignores_blank_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("resp.jsonl");
        fs::write(
            &path,
            "{\"caseid\": 1, \"age_r\": 44}\n\n   \n{\"caseid\": 2298, \"age_r\": 34}\n",
        )
        .unwrap();

        let records: Vec<RespondentRecord> = read_json_lines(&path, false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].caseid, 2298);
        assert_eq!(records[1].age_r, Some(34));
    }

    #[test]
    fn malformed_line_reports_one_based_line_number() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("resp.jsonl");
        fs::write(&path, "{\"caseid\": 1}\n{\"age_r\": 20}\n{\"caseid\": 3}\n").unwrap();

        let err = read_json_lines::<RespondentRecord>(&path, false).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedRecord { line: 2, .. }));

        let records: Vec<RespondentRecord> = read_json_lines(&path, true).unwrap();
        assert_eq!(
            records.iter().map(|r| r.caseid).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let err =
            read_json_lines::<RespondentRecord>(&temp.path().join("absent.jsonl"), false)
                .unwrap_err();
        assert!(matches!(err, SurveyError::Io(_)));
    }
}
