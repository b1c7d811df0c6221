//! # Error Types
//!
//! This module defines error types used throughout the ticketera library.
//!
//! Encoding failures ([`EncodeError`]) are kept separate from service-level
//! failures ([`TicketeraError`]) so the compiler can stay a pure function that
//! knows nothing about devices or HTTP.

use thiserror::Error;

/// Errors raised while turning operations into printer bytes.
///
/// Either variant aborts the whole job: nothing is handed to delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// An operand could not be parsed for its action.
    #[error("Malformed operand for {action}: {operand:?} ({reason})")]
    MalformedOperand {
        action: &'static str,
        operand: String,
        reason: String,
    },

    /// Text contains a character outside code page 850.
    #[error("Unsupported character '{character}' (U+{:04X}) at position {position}", codepoint(.character))]
    UnsupportedCharacter { character: char, position: usize },
}

fn codepoint(c: &char) -> u32 {
    *c as u32
}

impl EncodeError {
    pub(crate) fn malformed(
        action: &'static str,
        operand: &str,
        reason: impl Into<String>,
    ) -> Self {
        EncodeError::MalformedOperand {
            action,
            operand: operand.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main error type for ticketera operations
#[derive(Debug, Error)]
pub enum TicketeraError {
    /// The operation list could not be encoded
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// The job could not be written to its destination
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Server-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request rejected before encoding
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TicketeraError {
    /// Whether the failure was caused by the request content (as opposed to
    /// the printer or the host).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TicketeraError::Encode(_) | TicketeraError::InvalidRequest(_) | TicketeraError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_character_message() {
        let err = EncodeError::UnsupportedCharacter {
            character: '€',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported character '€' (U+20AC) at position 3"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = EncodeError::malformed("feed", "abc", "not a number");
        assert_eq!(
            err.to_string(),
            "Malformed operand for feed: \"abc\" (not a number)"
        );
    }

    #[test]
    fn test_client_error_classification() {
        let encode: TicketeraError = EncodeError::malformed("feed", "x", "bad").into();
        assert!(encode.is_client_error());
        assert!(!TicketeraError::Delivery("offline".into()).is_client_error());
    }
}
