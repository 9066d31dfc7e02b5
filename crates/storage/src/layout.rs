//! Stable binary layout for persisted records
//!
//! The encoded form is a contract surface: query callers may address
//! into it with raw byte-offset filters, so the offsets below are
//! FROZEN and must not change.
//!
//! All multi-byte integers are little-endian. Layout:
//!
//! | Offset       | Field                        | Size     |
//! |--------------|------------------------------|----------|
//! | 0            | discriminator                | 8        |
//! | 8            | author                       | 32       |
//! | 40           | created_at (i64)             | 8        |
//! | 48           | topic length prefix (u32)    | 4        |
//! | 52           | topic payload (UTF-8)        | variable |
//! | 52 + topic   | content length prefix (u32)  | 4        |
//! | ...          | content payload (UTF-8)      | variable |
//!
//! The discriminator is the first 8 bytes of the SHA-256 digest of
//! `"record:Tweet"`, reserved for record-type identification. Length
//! prefixes count bytes, not characters.

use byteorder::{ByteOrder, LittleEndian};
use chirp_core::{Error, RecordId, Result, Timestamp, TweetRecord};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

/// Size of the discriminator tag in bytes
pub const DISCRIMINATOR_LEN: usize = 8;

/// Byte offset of the author field
pub const AUTHOR_OFFSET: usize = 8;

/// Byte offset of the created_at field
pub const TIMESTAMP_OFFSET: usize = 40;

/// Byte offset of the topic length prefix
pub const TOPIC_LEN_OFFSET: usize = 48;

/// Byte offset of the topic payload
pub const TOPIC_OFFSET: usize = 52;

/// Seed string hashed to derive the record discriminator
const DISCRIMINATOR_SEED: &str = "record:Tweet";

static DISCRIMINATOR: Lazy<[u8; 8]> = Lazy::new(|| {
    let digest = Sha256::digest(DISCRIMINATOR_SEED.as_bytes());
    let mut tag = [0u8; 8];
    tag.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    tag
});

/// The fixed 8-byte discriminator prefixing every encoded record
pub fn discriminator() -> &'static [u8; 8] {
    &DISCRIMINATOR
}

/// Encode a record into its stable binary form
pub fn encode_record(record: &TweetRecord) -> Vec<u8> {
    let topic = record.topic.as_bytes();
    let content = record.content.as_bytes();

    let mut buf = Vec::with_capacity(TOPIC_OFFSET + topic.len() + 4 + content.len());
    buf.extend_from_slice(discriminator());
    buf.extend_from_slice(record.author.as_bytes());

    let mut scratch = [0u8; 8];
    LittleEndian::write_i64(&mut scratch, record.created_at.as_secs());
    buf.extend_from_slice(&scratch);

    LittleEndian::write_u32(&mut scratch[..4], topic.len() as u32);
    buf.extend_from_slice(&scratch[..4]);
    buf.extend_from_slice(topic);

    LittleEndian::write_u32(&mut scratch[..4], content.len() as u32);
    buf.extend_from_slice(&scratch[..4]);
    buf.extend_from_slice(content);

    buf
}

/// Decode a record from its stable binary form
///
/// The identifier is not part of the encoding (it keys the slot), so
/// the caller supplies it.
///
/// # Errors
///
/// Returns `Error::Corruption` if the buffer is truncated, carries the
/// wrong discriminator, has a length prefix pointing past the buffer,
/// or holds invalid UTF-8.
pub fn decode_record(id: RecordId, bytes: &[u8]) -> Result<TweetRecord> {
    if bytes.len() < TOPIC_OFFSET {
        return Err(Error::Corruption(format!(
            "record too short: {} bytes, need at least {}",
            bytes.len(),
            TOPIC_OFFSET
        )));
    }
    if &bytes[..DISCRIMINATOR_LEN] != discriminator() {
        return Err(Error::Corruption("bad record discriminator".to_string()));
    }

    let mut author = [0u8; 32];
    author.copy_from_slice(&bytes[AUTHOR_OFFSET..TIMESTAMP_OFFSET]);

    let created_at =
        Timestamp::from_secs(LittleEndian::read_i64(&bytes[TIMESTAMP_OFFSET..TOPIC_LEN_OFFSET]));

    let topic_len = LittleEndian::read_u32(&bytes[TOPIC_LEN_OFFSET..TOPIC_OFFSET]) as usize;
    let topic_end = TOPIC_OFFSET + topic_len;
    if bytes.len() < topic_end + 4 {
        return Err(Error::Corruption(
            "topic length prefix points past buffer".to_string(),
        ));
    }
    let topic = std::str::from_utf8(&bytes[TOPIC_OFFSET..topic_end])
        .map_err(|e| Error::Corruption(format!("topic is not valid UTF-8: {}", e)))?;

    let content_len = LittleEndian::read_u32(&bytes[topic_end..topic_end + 4]) as usize;
    let content_start = topic_end + 4;
    let content_end = content_start + content_len;
    if bytes.len() != content_end {
        return Err(Error::Corruption(format!(
            "content length prefix does not match buffer: expected {} bytes, have {}",
            content_end,
            bytes.len()
        )));
    }
    let content = std::str::from_utf8(&bytes[content_start..content_end])
        .map_err(|e| Error::Corruption(format!("content is not valid UTF-8: {}", e)))?;

    Ok(TweetRecord {
        id,
        author: chirp_core::AuthorId::from_bytes(author),
        created_at,
        topic: topic.to_string(),
        content: content.to_string(),
    })
}
