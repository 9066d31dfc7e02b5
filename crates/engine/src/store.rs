//! RecordStore: validated, append-only record creation
//!
//! ## Design
//!
//! RecordStore is a stateless facade over a shared `SlotStorage`
//! backend. It holds no in-memory state beyond the storage handle, its
//! limits, and its clock.
//!
//! ## Write Path
//!
//! `create` validates in a fixed order (topic, then content), stamps
//! `created_at` from the injected clock, encodes the record into the
//! stable binary layout, and inserts it into a fresh slot. Validation
//! failures happen before any persistence: a rejected write leaves
//! storage byte-for-byte unchanged.
//!
//! ## Thread Safety
//!
//! RecordStore is `Send + Sync`. Two concurrent creates with distinct
//! identifiers both succeed; two with the same identifier resolve to
//! exactly one success (first-writer-wins in the slot layer).

use std::sync::Arc;

use tracing::debug;

use chirp_core::{
    AuthorId, Clock, Error, Limits, RecordId, Result, SlotStorage, TweetRecord,
};
use chirp_storage::layout;

use crate::config::StoreOptions;

/// Validated, append-only store for tweet records
///
/// Stateless facade over a shared slot backend. Cheap to clone.
#[derive(Clone)]
pub struct RecordStore {
    slots: Arc<dyn SlotStorage>,
    limits: Limits,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// Create a store with default options (contract limits, system clock)
    pub fn new(slots: Arc<dyn SlotStorage>) -> Self {
        Self::with_options(slots, StoreOptions::default())
    }

    /// Create a store with explicit options
    pub fn with_options(slots: Arc<dyn SlotStorage>, options: StoreOptions) -> Self {
        Self {
            slots,
            limits: options.limits,
            clock: options.clock,
        }
    }

    /// Create a new record
    ///
    /// Validation order is fixed: topic first, then content. On
    /// success the record is persisted with `created_at` taken from
    /// the store's clock, and returned as persisted.
    ///
    /// # Errors
    ///
    /// - `Error::TopicTooLong` if the topic exceeds the limit; nothing
    ///   is persisted.
    /// - `Error::ContentTooLong` if the content exceeds the limit;
    ///   nothing is persisted.
    /// - `Error::RecordExists` if the identifier already has a slot,
    ///   propagated unchanged from the slot layer.
    ///
    /// Failure is terminal for the call: the store never retries.
    pub fn create(
        &self,
        id: RecordId,
        author: AuthorId,
        topic: &str,
        content: &str,
    ) -> Result<TweetRecord> {
        self.limits.validate_topic(topic)?;
        self.limits.validate_content(content)?;

        let record = TweetRecord {
            id,
            author,
            created_at: self.clock.now(),
            topic: topic.to_string(),
            content: content.to_string(),
        };

        let bytes = layout::encode_record(&record);
        self.slots.insert_fresh(id, bytes)?;
        debug!(id = %id, author = %author, "record created");

        Ok(record)
    }

    /// Get a record by identifier
    ///
    /// Returns `None` if no record is stored under the identifier.
    pub fn get(&self, id: &RecordId) -> Result<Option<TweetRecord>> {
        match self.slots.get(id)? {
            Some(bytes) => Ok(Some(layout::decode_record(*id, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Fetch a record that must exist
    ///
    /// # Errors
    ///
    /// Returns `Error::RecordNotFound` if no record is stored under the
    /// identifier.
    pub fn fetch(&self, id: &RecordId) -> Result<TweetRecord> {
        self.get(id)?.ok_or(Error::RecordNotFound(*id))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
