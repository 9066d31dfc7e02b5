//! Identity types for ChirpDB
//!
//! This module defines the two 32-byte identity newtypes:
//! - RecordId: caller-chosen unique key addressing a record's storage slot
//! - AuthorId: public identity of a record's author
//!
//! Both render as base58 strings, the conventional display form for
//! 32-byte public identities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-chosen unique key addressing a record's storage slot
///
/// A RecordId is an opaque 32-byte value. The creating caller picks it
/// and the slot store guarantees first-writer-wins: a RecordId is never
/// reused across records. Identifier assignment is controlled by the
/// caller, not derived from the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId([u8; 32]);

impl RecordId {
    /// Create a new random RecordId
    ///
    /// Convenience for callers that have no externally assigned key.
    pub fn new() -> Self {
        Self(rand::random())
    }

    /// Create a RecordId from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a RecordId from its base58 string representation
    ///
    /// Returns None if the string is not valid base58 or does not decode
    /// to exactly 32 bytes.
    pub fn from_string(s: &str) -> Option<Self> {
        let decoded = bs58::decode(s).into_vec().ok()?;
        let bytes: [u8; 32] = decoded.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Get the raw bytes of this RecordId
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

/// Public identity of a record's author
///
/// A fixed 32-byte identity supplied by the caller at creation time and
/// immutable thereafter. The store trusts the caller's authorization
/// proof implicitly; verifying it is the identity provider's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorId([u8; 32]);

impl AuthorId {
    /// Create a new random AuthorId
    pub fn new() -> Self {
        Self(rand::random())
    }

    /// Create an AuthorId from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse an AuthorId from its base58 string representation
    ///
    /// Returns None if the string is not valid base58 or does not decode
    /// to exactly 32 bytes.
    pub fn from_string(s: &str) -> Option<Self> {
        let decoded = bs58::decode(s).into_vec().ok()?;
        let bytes: [u8; 32] = decoded.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Get the raw bytes of this AuthorId
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}
