//! Respondent-to-record index.
//!
//! `RecordIndex` maps each respondent key to the positions of the records
//! that carry it. It is built in one linear pass over a fully materialized
//! collection and is read-only afterwards; rebuild it whenever the collection
//! changes.
//!
//! Guarantees for an index built from `records`:
//! - every position `0..records.len()` appears in exactly one key's list,
//! - each list is strictly ascending (the induced subsequence of source order,
//!   even when keys interleave),
//! - the key set is exactly the set of distinct keys in `records`.

use indexmap::IndexMap;
use tracing::{debug, error};

use crate::data::Keyed;
use crate::errors::IndexError;
use crate::types::{CaseId, RecordPosition};

/// One-to-many mapping from respondent key to record positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordIndex {
    positions: IndexMap<CaseId, Vec<RecordPosition>>,
    record_count: usize,
}

impl RecordIndex {
    /// Build the index from records that expose a respondent key.
    pub fn build<R: Keyed>(records: &[R]) -> Self {
        Self::build_by(records, R::respondent_key)
    }

    /// Build the index using `key` to extract each record's respondent key.
    pub fn build_by<R>(records: &[R], key: impl Fn(&R) -> CaseId) -> Self {
        let mut positions: IndexMap<CaseId, Vec<RecordPosition>> = IndexMap::new();
        for (position, record) in records.iter().enumerate() {
            positions.entry(key(record)).or_default().push(position);
        }
        debug!(
            records = records.len(),
            keys = positions.len(),
            "built record index"
        );
        Self {
            positions,
            record_count: records.len(),
        }
    }

    /// Positions for `key`, in source order.
    ///
    /// Absent keys are an error rather than an empty slice: every indexed key
    /// has at least one record.
    pub fn lookup(&self, key: CaseId) -> Result<&[RecordPosition], IndexError> {
        self.positions
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(IndexError::KeyNotFound { key })
    }

    /// Project the positions for `key` back into `records`.
    ///
    /// `IndexOutOfRange` means `records` shrank after the index was built;
    /// treat it as a bug in the caller.
    pub fn resolve<'a, R>(
        &self,
        records: &'a [R],
        key: CaseId,
    ) -> Result<Vec<&'a R>, IndexError> {
        self.lookup(key)?
            .iter()
            .map(|&position| {
                records.get(position).ok_or_else(|| {
                    error!(
                        key,
                        position,
                        len = records.len(),
                        indexed = self.record_count,
                        "stale record index: position out of range"
                    );
                    IndexError::IndexOutOfRange {
                        key,
                        position,
                        len: records.len(),
                    }
                })
            })
            .collect()
    }

    /// Whether `key` has at least one record.
    pub fn contains_key(&self, key: CaseId) -> bool {
        self.positions.contains_key(&key)
    }

    /// Indexed keys in order of first occurrence.
    pub fn keys(&self) -> impl Iterator<Item = CaseId> + '_ {
        self.positions.keys().copied()
    }

    /// `(key, positions)` pairs in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (CaseId, &[RecordPosition])> + '_ {
        self.positions
            .iter()
            .map(|(key, positions)| (*key, positions.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Length of the collection the index was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PregnancyRecord;

    fn preg(caseid: CaseId, outcome: i64) -> PregnancyRecord {
        PregnancyRecord {
            caseid,
            outcome: Some(outcome),
            ..PregnancyRecord::default()
        }
    }

    fn sample() -> Vec<PregnancyRecord> {
        vec![preg(10229, 4), preg(10229, 1), preg(5012, 1)]
    }

    #[test]
    fn build_groups_positions_by_key() {
        let index = RecordIndex::build(&sample());

        assert_eq!(index.len(), 2);
        assert_eq!(index.record_count(), 3);
        assert_eq!(index.lookup(10229).unwrap(), &[0, 1]);
        assert_eq!(index.lookup(5012).unwrap(), &[2]);
        assert_eq!(index.keys().collect::<Vec<_>>(), vec![10229, 5012]);
    }

    #[test]
    fn lookup_of_absent_key_is_key_not_found() {
        let index = RecordIndex::build(&sample());
        assert_eq!(
            index.lookup(9999).unwrap_err(),
            IndexError::KeyNotFound { key: 9999 }
        );
        assert!(!index.contains_key(9999));
        assert!(index.contains_key(5012));
    }

    #[test]
    fn resolve_returns_records_in_lookup_order() {
        let records = sample();
        let index = RecordIndex::build(&records);

        let resolved = index.resolve(&records, 10229).unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(std::ptr::eq(resolved[0], &records[0]));
        assert!(std::ptr::eq(resolved[1], &records[1]));
        assert_eq!(resolved[0].outcome, Some(4));
    }

    #[test]
    fn resolve_against_truncated_records_is_out_of_range() {
        let mut records = sample();
        let index = RecordIndex::build(&records);
        records.truncate(1);

        let err = index.resolve(&records, 10229).unwrap_err();
        assert_eq!(
            err,
            IndexError::IndexOutOfRange {
                key: 10229,
                position: 1,
                len: 1
            }
        );
        assert_eq!(
            index.resolve(&records, 9999).unwrap_err(),
            IndexError::KeyNotFound { key: 9999 }
        );
    }

    #[test]
    fn interleaved_keys_keep_source_subsequence_order() {
        let records = vec![preg(1, 1), preg(2, 1), preg(1, 2), preg(3, 1), preg(2, 2)];
        let index = RecordIndex::build(&records);

        assert_eq!(index.lookup(1).unwrap(), &[0, 2]);
        assert_eq!(index.lookup(2).unwrap(), &[1, 4]);
        assert_eq!(index.lookup(3).unwrap(), &[3]);
    }

    #[test]
    fn build_by_accepts_custom_key_extractors() {
        let pairs = vec![(7_i64, "a"), (8, "b"), (7, "c")];
        let index = RecordIndex::build_by(&pairs, |(key, _)| *key);
        assert_eq!(index.lookup(7).unwrap(), &[0, 2]);
        let resolved = index.resolve(&pairs, 7).unwrap();
        assert_eq!(resolved.iter().map(|(_, v)| *v).collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn empty_collection_builds_empty_index() {
        let index = RecordIndex::build::<PregnancyRecord>(&[]);
        assert!(index.is_empty());
        assert_eq!(index.record_count(), 0);
        assert!(index.lookup(1).is_err());
    }
}
