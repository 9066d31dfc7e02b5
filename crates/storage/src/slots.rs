//! SlotStore: MVP slot storage backend
//!
//! Implements the `SlotStorage` trait using:
//! - `BTreeMap<RecordId, Vec<u8>>` for ordered slot storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **First-writer-wins**: a slot is allocated exactly once; a second
//!   insert for the same identifier fails with `RecordExists` and
//!   leaves the map untouched. Two concurrent inserts for the same
//!   identifier therefore resolve to exactly one success.
//! - **All-or-nothing visibility**: slots only ever receive fully
//!   encoded records, inserted under the write lock, so a reader never
//!   observes a partially written record.
//! - **No update, no delete**: records are immutable after creation.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use chirp_core::{Error, RecordId, Result, SlotStorage, SnapshotView};

use crate::snapshot::SlotSnapshot;

/// Slot storage backend using BTreeMap with RwLock
///
/// Thread-safe through `parking_lot::RwLock`. Multiple handles over the
/// same store (via `Arc`) are safe.
#[derive(Debug, Default)]
pub struct SlotStore {
    slots: RwLock<BTreeMap<RecordId, Vec<u8>>>,
}

impl SlotStore {
    /// Create a new empty SlotStore
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a snapshot of the current slot contents
    ///
    /// Deep-clones the map under the read lock; see `SlotSnapshot` for
    /// the cost/correctness trade-off.
    pub fn snapshot(&self) -> SlotSnapshot {
        let slots = self.slots.read();
        SlotSnapshot::new(slots.clone())
    }
}

impl SlotStorage for SlotStore {
    fn insert_fresh(&self, id: RecordId, bytes: Vec<u8>) -> Result<()> {
        let mut slots = self.slots.write();
        match slots.entry(id) {
            Entry::Vacant(slot) => {
                debug!(id = %id, len = bytes.len(), "slot allocated");
                slot.insert(bytes);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::RecordExists(id)),
        }
    }

    fn get(&self, id: &RecordId) -> Result<Option<Vec<u8>>> {
        let slots = self.slots.read();
        Ok(slots.get(id).cloned())
    }

    fn create_snapshot(&self) -> Box<dyn SnapshotView> {
        Box::new(self.snapshot())
    }

    fn len(&self) -> usize {
        self.slots.read().len()
    }
}
