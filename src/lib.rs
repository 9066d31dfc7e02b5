//! ChirpDB - Embedded append-only record store for tweet-shaped records
//!
//! ChirpDB stores fixed-shape records (author, topic, content, creation
//! timestamp) under caller-chosen 32-byte identifiers, validates field
//! lengths at write time, and serves equality-filtered scans.
//!
//! # Quick Start
//!
//! ```
//! use chirpdb::{Chirp, AuthorId, RecordId, Predicate};
//!
//! let db = Chirp::in_memory();
//! let author = AuthorId::new();
//!
//! let record = db.create(RecordId::new(), author, "veganism", "Vegans rocks")?;
//! assert_eq!(record.topic, "veganism");
//!
//! let matches = db.list_filtered(&[Predicate::Author(author)])?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), chirpdb::Error>(())
//! ```
//!
//! # Architecture
//!
//! The [`Chirp`] handle bundles a [`RecordStore`] (write path: validate,
//! timestamp, encode, allocate slot) and a [`QueryEngine`] (read path:
//! snapshot scan with conjunctive equality filters) over one shared
//! in-memory slot store. Records are immutable once created; there is
//! no update or delete.

pub use chirp_core::{
    AuthorId, Clock, Error, Limits, ManualClock, RecordId, Result, SlotStorage, SnapshotView,
    SystemClock, Timestamp, TweetRecord, MAX_CONTENT_CHARS, MAX_TOPIC_CHARS,
};
pub use chirp_engine::{MemcmpFilter, Predicate, QueryEngine, RecordStore, StoreOptions};
pub use chirp_storage::{layout, SlotStore};

use std::sync::Arc;

/// High-level handle bundling the record store and query engine
///
/// Both halves share one slot store; records created through the handle
/// are immediately visible to its queries.
#[derive(Clone)]
pub struct Chirp {
    store: RecordStore,
    query: QueryEngine,
}

impl Chirp {
    /// Create an in-memory database with default options
    pub fn in_memory() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an in-memory database with explicit options
    pub fn with_options(options: StoreOptions) -> Self {
        let slots: Arc<SlotStore> = Arc::new(SlotStore::new());
        Self {
            store: RecordStore::with_options(slots.clone(), options),
            query: QueryEngine::new(slots),
        }
    }

    /// Create a new record; see [`RecordStore::create`]
    pub fn create(
        &self,
        id: RecordId,
        author: AuthorId,
        topic: &str,
        content: &str,
    ) -> Result<TweetRecord> {
        self.store.create(id, author, topic, content)
    }

    /// Get a record by identifier; see [`RecordStore::get`]
    pub fn get(&self, id: &RecordId) -> Result<Option<TweetRecord>> {
        self.store.get(id)
    }

    /// Fetch a record that must exist; see [`RecordStore::fetch`]
    pub fn fetch(&self, id: &RecordId) -> Result<TweetRecord> {
        self.store.fetch(id)
    }

    /// Return every persisted record; see [`QueryEngine::list_all`]
    pub fn list_all(&self) -> Result<Vec<TweetRecord>> {
        self.query.list_all()
    }

    /// Return records matching all typed predicates; see [`QueryEngine::list_filtered`]
    pub fn list_filtered(&self, predicates: &[Predicate]) -> Result<Vec<TweetRecord>> {
        self.query.list_filtered(predicates)
    }

    /// Return records matching all raw byte filters; see [`QueryEngine::list_matching`]
    pub fn list_matching(&self, filters: &[MemcmpFilter]) -> Result<Vec<TweetRecord>> {
        self.query.list_matching(filters)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the database holds no records
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for Chirp {
    fn default() -> Self {
        Self::in_memory()
    }
}
