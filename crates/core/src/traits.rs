//! Core traits for slot storage and snapshot abstraction
//!
//! These traits let the engine swap slot-store implementations without
//! breaking upper layers. The MVP implementation lives in
//! `chirp-storage`.

use crate::error::Result;
use crate::types::RecordId;

/// Durable slot storage keyed by record identifier
///
/// A slot holds one fully encoded record. Slots are allocated
/// first-writer-wins: the first `insert_fresh` for an identifier
/// succeeds, every later one fails. There is no update or delete.
///
/// Thread safety: all methods must be safe to call concurrently
/// (requires Send + Sync).
pub trait SlotStorage: Send + Sync {
    /// Insert an encoded record under a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `Error::RecordExists` if the identifier already has a
    /// slot. The slot map is untouched in that case.
    fn insert_fresh(&self, id: RecordId, bytes: Vec<u8>) -> Result<()>;

    /// Get the encoded record stored under an identifier
    ///
    /// Returns None if no slot exists for the identifier.
    fn get(&self, id: &RecordId) -> Result<Option<Vec<u8>>>;

    /// Create a snapshot of the current slot contents
    ///
    /// The view is immutable: writes after snapshot creation are not
    /// visible through it. A snapshot never contains a partially
    /// written record because slots only ever receive fully encoded
    /// bytes.
    fn create_snapshot(&self) -> Box<dyn SnapshotView>;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable point-in-time view over slot contents
pub trait SnapshotView {
    /// Get the encoded record for an identifier, if present
    fn get(&self, id: &RecordId) -> Option<&[u8]>;

    /// Iterate over all (identifier, encoded record) pairs
    ///
    /// Iteration order is unspecified; callers treat the result as a
    /// set.
    fn iter(&self) -> Box<dyn Iterator<Item = (&RecordId, &[u8])> + '_>;

    /// Number of records in the snapshot
    fn len(&self) -> usize;

    /// Whether the snapshot is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
