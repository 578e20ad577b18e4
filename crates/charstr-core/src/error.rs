//! # Error Types
//!
//! Every conversion failure in this crate is reported through
//! [`CharacterStringError`]. Errors carry the offending value and the name of
//! the encoding that rejected it, and are returned at the point of failure.
//! Nothing here retries or recovers: an encoding mismatch is deterministic.

use thiserror::Error;

use crate::encoding::Encoding;
use crate::variant::Variant;

/// Result type alias using [`CharacterStringError`].
pub type Result<T> = std::result::Result<T, CharacterStringError>;

/// Errors raised while normalizing or converting a character string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharacterStringError {
    /// The initializer could not be turned into a byte or text form.
    #[error("bad {variant} initializer: {reason}")]
    Initializer {
        /// Variant being constructed.
        variant: Variant,
        /// What was wrong with the input.
        reason: String,
    },

    /// Bytes are not valid under the encoding.
    #[error("can't decode {} with '{encoding}' codec at offset {offset}", hex_preview(.bytes))]
    Decode {
        /// Encoding that rejected the bytes.
        encoding: Encoding,
        /// The full byte sequence that was being decoded.
        bytes: Vec<u8>,
        /// Byte offset of the first invalid code unit.
        offset: usize,
    },

    /// Text contains a character the encoding cannot represent.
    #[error("can't encode string {text:?} with '{encoding}' codec at offset {offset}")]
    Encode {
        /// Encoding that rejected the text.
        encoding: Encoding,
        /// The canonical text that was being encoded.
        text: String,
        /// Byte offset (into the UTF-8 text) of the unencodable character.
        offset: usize,
    },

    /// A subtype constraint rejected the canonical text.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// No catalog entry carries this name or tag number.
    #[error("unknown character string type: {0:?}")]
    UnknownVariant(String),

    /// No supported encoding carries this name.
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),
}

impl CharacterStringError {
    /// Returns true for the two codec failures (`Decode` and `Encode`).
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Encode { .. })
    }
}

// Long inputs are truncated in the message; the full bytes stay on the error.
fn hex_preview(bytes: &[u8]) -> String {
    const MAX: usize = 32;
    let mut out: String = bytes
        .iter()
        .take(MAX)
        .map(|b| format!("{b:02x}"))
        .collect();
    if bytes.len() > MAX {
        out.push_str("...");
    }
    format!("0x{out}")
}
