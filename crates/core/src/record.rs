//! The persisted record contract type

use crate::timestamp::Timestamp;
use crate::types::{AuthorId, RecordId};
use serde::{Deserialize, Serialize};

/// One persisted tweet-shaped record
///
/// Created in a single atomic step and immutable thereafter: there is
/// no update or delete transition. The record is logically owned by its
/// `author` for query purposes, while `id` is chosen by the creating
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetRecord {
    /// Caller-chosen unique key addressing this record's storage slot
    pub id: RecordId,
    /// Public identity of the author, set once at creation
    pub author: AuthorId,
    /// Creation time assigned by the store (seconds since epoch)
    pub created_at: Timestamp,
    /// Topic string, 0 to 50 characters
    pub topic: String,
    /// Content string, at most 280 characters
    pub content: String,
}
