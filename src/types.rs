/// Respondent identifier shared by the pregnancy and respondent files.
/// Examples: `10229`, `2298`, `5012`
pub type CaseId = i64;
/// 0-based ordinal of a record within its source collection at index-build time.
/// Examples: `0`, `7642`
pub type RecordPosition = usize;
/// Column name as it appears in the NSFG codebook.
/// Examples: `caseid`, `pregordr`, `birthwgt_lb`
pub type ColumnName = String;
/// Identifier for the source that produced a record collection.
/// Examples: `2002FemPreg`, `2002FemResp`
pub type SourceId = String;
/// File path strings used in diagnostics.
/// Example: `demos/data/2002FemPreg.jsonl`
pub type PathString = String;
