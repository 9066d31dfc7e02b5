//! Field-length limits for record validation
//!
//! Limits are enforced by the record store before any persistence.
//! Violations return the fixed validation errors and leave storage
//! untouched.
//!
//! ## Contract
//!
//! Lengths are measured in characters (Unicode scalar values), not
//! bytes. The defaults are FROZEN contract values: a topic holds at
//! most 50 characters, a content string at most 280.

use crate::error::{Error, Result};

/// Maximum topic length in characters
pub const MAX_TOPIC_CHARS: usize = 50;

/// Maximum content length in characters
pub const MAX_CONTENT_CHARS: usize = 280;

/// Field-length limits enforced at record creation
///
/// Carried by the store's configuration object so tests can tighten
/// them; the defaults are the contract values.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum topic length in characters (default: 50)
    pub max_topic_chars: usize,

    /// Maximum content length in characters (default: 280)
    pub max_content_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_topic_chars: MAX_TOPIC_CHARS,
            max_content_chars: MAX_CONTENT_CHARS,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// Useful for unit tests that exercise limit enforcement without
    /// building long strings.
    pub fn with_small_limits() -> Self {
        Limits {
            max_topic_chars: 5,
            max_content_chars: 10,
        }
    }

    /// Validate a topic string
    ///
    /// The empty topic is valid. Returns `Error::TopicTooLong` if the
    /// character count exceeds the maximum.
    pub fn validate_topic(&self, topic: &str) -> Result<()> {
        if topic.chars().count() > self.max_topic_chars {
            return Err(Error::TopicTooLong);
        }
        Ok(())
    }

    /// Validate a content string
    ///
    /// Only the maximum is enforced; whether content must be non-empty
    /// is an open policy decision and deliberately not checked here.
    pub fn validate_content(&self, content: &str) -> Result<()> {
        if content.chars().count() > self.max_content_chars {
            return Err(Error::ContentTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Topic Tests ===

    #[test]
    fn test_empty_topic_valid() {
        let limits = Limits::default();
        assert!(limits.validate_topic("").is_ok());
    }

    #[test]
    fn test_topic_at_max_length() {
        let limits = Limits::default();
        let topic = "x".repeat(limits.max_topic_chars);
        assert!(limits.validate_topic(&topic).is_ok());
    }

    #[test]
    fn test_topic_exceeds_max_length() {
        let limits = Limits::default();
        let topic = "x".repeat(limits.max_topic_chars + 1);
        let result = limits.validate_topic(&topic);
        assert!(matches!(result, Err(Error::TopicTooLong)));
    }

    #[test]
    fn test_topic_much_larger_than_max() {
        let limits = Limits::default();
        let topic = "x".repeat(100);
        assert!(matches!(
            limits.validate_topic(&topic),
            Err(Error::TopicTooLong)
        ));
    }

    #[test]
    fn test_topic_counts_chars_not_bytes() {
        let limits = Limits::default();
        // 50 two-byte characters: 100 bytes, exactly at the char limit
        let topic = "é".repeat(50);
        assert_eq!(topic.len(), 100);
        assert!(limits.validate_topic(&topic).is_ok());

        let over = "é".repeat(51);
        assert!(matches!(
            limits.validate_topic(&over),
            Err(Error::TopicTooLong)
        ));
    }

    // === Content Tests ===

    #[test]
    fn test_content_at_max_length() {
        let limits = Limits::default();
        let content = "x".repeat(limits.max_content_chars);
        assert!(limits.validate_content(&content).is_ok());
    }

    #[test]
    fn test_content_exceeds_max_length() {
        let limits = Limits::default();
        let content = "x".repeat(limits.max_content_chars + 1);
        let result = limits.validate_content(&content);
        assert!(matches!(result, Err(Error::ContentTooLong)));
    }

    #[test]
    fn test_empty_content_valid() {
        // Minimum content length is an open policy decision; the
        // current contract only enforces the maximum.
        let limits = Limits::default();
        assert!(limits.validate_content("").is_ok());
    }

    #[test]
    fn test_content_counts_chars_not_bytes() {
        let limits = Limits::default();
        let content = "字".repeat(280);
        assert!(content.len() > 280);
        assert!(limits.validate_content(&content).is_ok());
    }

    // === Custom Limits ===

    #[test]
    fn test_small_limits_respected() {
        let limits = Limits::with_small_limits();
        assert!(limits.validate_topic("abcde").is_ok());
        assert!(limits.validate_topic("abcdef").is_err());
        assert!(limits.validate_content("0123456789").is_ok());
        assert!(limits.validate_content("0123456789x").is_err());
    }

    #[test]
    fn test_default_limits_match_contract() {
        let limits = Limits::default();
        assert_eq!(limits.max_topic_chars, 50);
        assert_eq!(limits.max_content_chars, 280);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validation_agrees_with_char_count(s in "\\PC{0,100}") {
                let limits = Limits::default();
                let chars = s.chars().count();
                prop_assert_eq!(limits.validate_topic(&s).is_ok(), chars <= 50);
                prop_assert!(limits.validate_content(&s).is_ok());
            }

            #[test]
            fn byte_length_never_affects_validation(c in proptest::char::any(), n in 0usize..=50) {
                // n repetitions of any single char are within the topic
                // limit regardless of the char's UTF-8 width
                let limits = Limits::default();
                let s: String = std::iter::repeat(c).take(n).collect();
                prop_assert!(limits.validate_topic(&s).is_ok());
            }
        }
    }
}
