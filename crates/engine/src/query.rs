//! QueryEngine: filtered scans over stored records
//!
//! ## Predicates
//!
//! The public filter surface is typed: `Predicate::Author` and
//! `Predicate::Topic` name fields, and the engine lowers them to byte
//! filters against the stable record layout. Callers that need
//! byte-exact layout addressing can build `MemcmpFilter`s directly.
//!
//! A record matches iff ALL filters hold (conjunction only; no OR,
//! range, or negation). Zero matches is a successful empty result,
//! never an error.
//!
//! ## Consistency
//!
//! Scans run against a snapshot of the slot store. A concurrent write
//! may or may not be visible, but a partially written record never is.

use std::sync::Arc;

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use chirp_core::{AuthorId, Result, SlotStorage, TweetRecord};
use chirp_storage::layout;

/// Raw byte-equality filter against the encoded record form
///
/// Matches records whose encoded bytes at `offset` equal `bytes`
/// exactly. Offsets address into the layout documented in
/// `chirp_storage::layout`; this is the low-level surface for callers
/// that need byte-exact compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcmpFilter {
    /// Byte offset into the encoded record
    pub offset: usize,
    /// Bytes the encoded record must carry at the offset
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    /// Create a filter from an offset and expected bytes
    pub fn new(offset: usize, bytes: Vec<u8>) -> Self {
        Self { offset, bytes }
    }

    /// Whether an encoded record matches this filter
    pub fn matches(&self, encoded: &[u8]) -> bool {
        let end = match self.offset.checked_add(self.bytes.len()) {
            Some(end) => end,
            None => return false,
        };
        encoded.len() >= end && &encoded[self.offset..end] == self.bytes.as_slice()
    }
}

/// Typed equality predicate over a named record field
///
/// Decouples callers from the physical encoding: the engine translates
/// each predicate to the byte filter the current layout requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Record's author equals the given identity
    Author(AuthorId),
    /// Record's topic equals the given string exactly
    Topic(String),
}

impl Predicate {
    /// Lower this predicate to a byte filter against the stable layout
    ///
    /// Topic predicates cover the u32 length prefix as well as the
    /// payload, so a queried topic never matches a longer topic that
    /// merely starts with it.
    pub fn to_filter(&self) -> MemcmpFilter {
        match self {
            Predicate::Author(author) => {
                MemcmpFilter::new(layout::AUTHOR_OFFSET, author.as_bytes().to_vec())
            }
            Predicate::Topic(topic) => {
                let payload = topic.as_bytes();
                let mut bytes = Vec::with_capacity(4 + payload.len());
                let mut prefix = [0u8; 4];
                LittleEndian::write_u32(&mut prefix, payload.len() as u32);
                bytes.extend_from_slice(&prefix);
                bytes.extend_from_slice(payload);
                MemcmpFilter::new(layout::TOPIC_LEN_OFFSET, bytes)
            }
        }
    }
}

/// Scans stored records and returns those matching equality filters
///
/// Stateless facade over a shared slot backend. Cheap to clone.
#[derive(Clone)]
pub struct QueryEngine {
    slots: Arc<dyn SlotStorage>,
}

impl QueryEngine {
    /// Create a query engine over a slot backend
    pub fn new(slots: Arc<dyn SlotStorage>) -> Self {
        Self { slots }
    }

    /// Return every persisted record
    ///
    /// Order is unspecified; callers treat the result as a set.
    pub fn list_all(&self) -> Result<Vec<TweetRecord>> {
        self.list_matching(&[])
    }

    /// Return records matching ALL of the given typed predicates
    pub fn list_filtered(&self, predicates: &[Predicate]) -> Result<Vec<TweetRecord>> {
        let filters: Vec<MemcmpFilter> = predicates.iter().map(Predicate::to_filter).collect();
        self.list_matching(&filters)
    }

    /// Return records matching ALL of the given raw byte filters
    ///
    /// An empty filter set matches every record.
    pub fn list_matching(&self, filters: &[MemcmpFilter]) -> Result<Vec<TweetRecord>> {
        let snapshot = self.slots.create_snapshot();
        let mut records = Vec::new();
        for (id, encoded) in snapshot.iter() {
            if filters.iter().all(|filter| filter.matches(encoded)) {
                records.push(layout::decode_record(*id, encoded)?);
            }
        }
        debug!(
            scanned = snapshot.len(),
            matched = records.len(),
            filters = filters.len(),
            "scan complete"
        );
        Ok(records)
    }
}
