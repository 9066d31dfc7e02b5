//! Core types and traits for ChirpDB
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId / AuthorId: 32-byte identity newtypes (base58 display)
//! - Timestamp: second-precision creation time
//! - TweetRecord: the persisted record contract type
//! - Limits: field-length validation (topic <= 50 chars, content <= 280)
//! - Error: error type hierarchy with fixed validation messages
//! - Clock: injectable time source
//! - Traits: SlotStorage and SnapshotView seams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod limits;
pub mod record;
pub mod timestamp;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use limits::{Limits, MAX_CONTENT_CHARS, MAX_TOPIC_CHARS};
pub use record::TweetRecord;
pub use timestamp::Timestamp;
pub use traits::{SlotStorage, SnapshotView};
pub use types::{AuthorId, RecordId};
