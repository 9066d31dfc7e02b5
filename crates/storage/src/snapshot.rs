//! Cloned point-in-time view over slot contents
//!
//! The MVP snapshot deep-clones the slot map under the read lock.
//! O(n), but correct: the view is fully detached from live storage, so
//! concurrent writers can never surface a partially visible record
//! through it. The `SnapshotView` trait seam allows a lazy, version-
//! filtered implementation later without touching callers.

use chirp_core::{RecordId, SnapshotView};
use std::collections::BTreeMap;

/// Immutable snapshot of the slot store at a point in time
#[derive(Debug, Clone)]
pub struct SlotSnapshot {
    records: BTreeMap<RecordId, Vec<u8>>,
}

impl SlotSnapshot {
    /// Create a snapshot from cloned slot contents
    pub(crate) fn new(records: BTreeMap<RecordId, Vec<u8>>) -> Self {
        Self { records }
    }
}

impl SnapshotView for SlotSnapshot {
    fn get(&self, id: &RecordId) -> Option<&[u8]> {
        self.records.get(id).map(|bytes| bytes.as_slice())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&RecordId, &[u8])> + '_> {
        Box::new(self.records.iter().map(|(id, bytes)| (id, bytes.as_slice())))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
