//! Error types for ChirpDB
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! The two validation variants carry fixed user-visible messages that
//! are part of the external contract and must not be reworded.

use crate::types::RecordId;
use thiserror::Error;

/// Result type alias for ChirpDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record store and query engine
#[derive(Debug, Error)]
pub enum Error {
    /// Topic exceeds the 50-character maximum
    #[error("The provided topic should be 50 characters long maximum.")]
    TopicTooLong,

    /// Content exceeds the 280-character maximum
    #[error("The provided content should be 280 characters long maximum.")]
    ContentTooLong,

    /// A record already occupies the slot for this identifier
    ///
    /// Raised by the slot allocation layer (first-writer-wins) and
    /// propagated unchanged by the record store.
    #[error("Record already exists: {0}")]
    RecordExists(RecordId),

    /// No record is stored under this identifier
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// Stored bytes violate the record layout
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}
