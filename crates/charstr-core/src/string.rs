//! # Character String Values — The Conversion Contract
//!
//! [`CharacterString`] holds a variant and the canonical text of the value.
//! The canonical text is the single source of truth: the byte form and the
//! numeric view are produced from it on demand, using the encoding the
//! variant names in the catalog.
//!
//! ## Normalization
//!
//! | Input | Result |
//! |-------|--------|
//! | text | stored unchanged, no encoding check |
//! | bytes | decoded with the variant's encoding |
//! | integers | each must fit in a byte, then decoded as bytes |
//! | any `Display` value | its string form, stored like text |
//!
//! Encoding validity is checked only when bytes cross the boundary. A
//! `PrintableString` built from `"café"` is a valid value; asking for its
//! byte form is what fails.
//!
//! ## Equality
//!
//! Values compare, order and hash by canonical text alone. The variant is a
//! property of the type, not of the value, so a `UTF8String` and an
//! `IA5String` holding the same text are equal.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::constraint::{Constraint, ConstraintSet};
use crate::encoding::Encoding;
use crate::error::{CharacterStringError, Result};
use crate::tag::{Tag, TagSet};
use crate::variant::Variant;

/// The accepted constructor inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// Native text, taken as canonical.
    Text(String),
    /// A byte form to decode.
    Bytes(Vec<u8>),
    /// Byte values given as integers.
    Numbers(Vec<i64>),
    /// The string form of some other value.
    Other(String),
}

impl Initializer {
    /// Initializer from the `Display` form of any value.
    pub fn display(value: &impl Display) -> Self {
        Self::Other(value.to_string())
    }
}

impl From<&str> for Initializer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Initializer {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Initializer {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Vec<u8>> for Initializer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Initializer {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Initializer {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<i64>> for Initializer {
    fn from(numbers: Vec<i64>) -> Self {
        Self::Numbers(numbers)
    }
}

impl From<&[i64]> for Initializer {
    fn from(numbers: &[i64]) -> Self {
        Self::Numbers(numbers.to_vec())
    }
}

/// Turn an initializer into canonical text for `variant`.
///
/// # Errors
///
/// - `Decode` when bytes are invalid under the variant's encoding.
/// - `Initializer` when an integer does not fit in a byte.
pub fn normalize(variant: Variant, init: Initializer) -> Result<String> {
    match init {
        Initializer::Text(text) | Initializer::Other(text) => Ok(text),
        Initializer::Bytes(bytes) => decode(variant, &bytes),
        Initializer::Numbers(numbers) => {
            let bytes = numbers_to_bytes(variant, &numbers)?;
            decode(variant, &bytes)
        }
    }
}

/// Byte form of `text` under `variant`'s encoding.
///
/// # Errors
///
/// Returns `Encode` when `text` holds a character the encoding cannot
/// represent.
pub fn encode(variant: Variant, text: &str) -> Result<Vec<u8>> {
    let encoding = variant.encoding();
    encoding.encode(text).map_err(|e| {
        tracing::debug!(%variant, %encoding, error = %e, "character string encode failed");
        e
    })
}

fn decode(variant: Variant, bytes: &[u8]) -> Result<String> {
    let encoding = variant.encoding();
    match encoding.decode(bytes) {
        Ok(text) => {
            tracing::trace!(%variant, %encoding, len = bytes.len(), "decoded character string");
            Ok(text)
        }
        Err(e) => {
            tracing::debug!(%variant, %encoding, error = %e, "character string decode failed");
            Err(e)
        }
    }
}

fn numbers_to_bytes(variant: Variant, numbers: &[i64]) -> Result<Vec<u8>> {
    numbers
        .iter()
        .enumerate()
        .map(|(index, &n)| {
            u8::try_from(n).map_err(|_| CharacterStringError::Initializer {
                variant,
                reason: format!("element {n} at index {index} is out of byte range"),
            })
        })
        .collect()
}

/// An immutable restricted character string value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterString {
    #[serde(rename = "type")]
    variant: Variant,
    #[serde(rename = "value")]
    text: String,
}

impl CharacterString {
    /// Build a value of `variant` from any accepted input.
    ///
    /// # Errors
    ///
    /// See [`normalize`]. Text input never fails.
    pub fn new(variant: Variant, init: impl Into<Initializer>) -> Result<Self> {
        let text = normalize(variant, init.into())?;
        Ok(Self { variant, text })
    }

    /// Build a value from text. Infallible: the encoding is not consulted.
    pub fn from_text(variant: Variant, text: impl Into<String>) -> Self {
        Self {
            variant,
            text: text.into(),
        }
    }

    /// Build a value by decoding its byte form.
    pub fn from_bytes(variant: Variant, bytes: &[u8]) -> Result<Self> {
        let text = decode(variant, bytes)?;
        Ok(Self { variant, text })
    }

    /// Build a value from byte values given as integers.
    pub fn from_numbers<I>(variant: Variant, numbers: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let numbers: Vec<i64> = numbers.into_iter().map(Into::into).collect();
        Self::new(variant, Initializer::Numbers(numbers))
    }

    /// Build a value from the `Display` form of `value`.
    pub fn from_display(variant: Variant, value: &impl Display) -> Self {
        Self::from_text(variant, value.to_string())
    }

    /// The variant this value was built as.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Universal tag of the variant.
    pub fn tag(&self) -> Tag {
        self.variant.tag()
    }

    /// Tag set a wire encoder dispatches on.
    pub fn tag_set(&self) -> TagSet {
        self.variant.tag_set()
    }

    /// Encoding of the byte form.
    pub fn encoding(&self) -> Encoding {
        self.variant.encoding()
    }

    /// Canonical text. Never fails.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the value, returning its canonical text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of characters in the canonical text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True for the empty string.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte form under the variant's encoding.
    ///
    /// `padding` mirrors the octet-string interface and has no effect here.
    ///
    /// # Errors
    ///
    /// Returns `Encode` when the text holds a character the encoding cannot
    /// represent.
    pub fn to_bytes(&self, padding: bool) -> Result<Vec<u8>> {
        let _ = padding;
        encode(self.variant, &self.text)
    }

    /// Byte form with default padding.
    pub fn as_octets(&self) -> Result<Vec<u8>> {
        self.to_bytes(true)
    }

    /// Byte form exposed as one integer per byte.
    ///
    /// For the multi-byte encodings this is one entry per encoded byte, not
    /// per character. Use [`scalar_values`](Self::scalar_values) for code
    /// points.
    pub fn to_numbers(&self, padding: bool) -> Result<Vec<u8>> {
        self.to_bytes(padding)
    }

    /// Unicode scalar values of the canonical text. Never fails.
    pub fn scalar_values(&self) -> Vec<u32> {
        self.text.chars().map(u32::from).collect()
    }

    /// Output form of canonical text, which is the canonical text itself.
    pub fn pretty_out(text: &str) -> &str {
        text
    }

    /// Check the canonical text against subtype constraints.
    pub fn check(&self, constraints: &ConstraintSet) -> Result<()> {
        constraints.check(&self.text)
    }

    /// Check the canonical text against the variant's X.680 alphabet, if it
    /// has a fixed one.
    pub fn check_alphabet(&self) -> Result<()> {
        match self.variant.permitted_alphabet() {
            Some(alphabet) => Constraint::PermittedAlphabet { alphabet }.check(&self.text),
            None => Ok(()),
        }
    }
}

impl Display for CharacterString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::pretty_out(&self.text))
    }
}

impl AsRef<str> for CharacterString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq for CharacterString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for CharacterString {}

impl PartialEq<str> for CharacterString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for CharacterString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialOrd for CharacterString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharacterString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for CharacterString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_stored_unchanged() {
        let s = CharacterString::new(Variant::Utf8String, "caf\u{e9}").unwrap();
        assert_eq!(s.as_str(), "café");
        assert_eq!(s.to_bytes(true).unwrap(), [0x63, 0x61, 0x66, 0xc3, 0xa9]);
    }

    #[test]
    fn test_text_construction_skips_encoding_check() {
        let s = CharacterString::new(Variant::PrintableString, "café").unwrap();
        assert_eq!(s, "café");
        let err = s.to_bytes(true).unwrap_err();
        assert!(matches!(
            err,
            CharacterStringError::Encode {
                encoding: Encoding::Ascii,
                offset: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_numbers_decode_as_bytes() {
        let s = CharacterString::new(Variant::Ia5String, vec![72i64, 101, 108, 108, 111]).unwrap();
        assert_eq!(s.as_str(), "Hello");
        assert_eq!(s.to_numbers(true).unwrap(), [72, 101, 108, 108, 111]);
    }

    #[test]
    fn test_numbers_out_of_range() {
        for bad in [vec![72i64, 256], vec![-1]] {
            let err = CharacterString::new(Variant::Ia5String, bad).unwrap_err();
            assert!(matches!(
                err,
                CharacterStringError::Initializer {
                    variant: Variant::Ia5String,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_numbers_then_invalid_bytes_is_decode_error() {
        let err = CharacterString::from_numbers(Variant::Ia5String, [0x41u8, 0xff]).unwrap_err();
        assert!(matches!(err, CharacterStringError::Decode { offset: 1, .. }));
    }

    #[test]
    fn test_bytes_decode_with_variant_encoding() {
        let bmp = CharacterString::new(Variant::BmpString, &[0x00u8, 0x48, 0x00, 0x69]).unwrap();
        assert_eq!(bmp, "Hi");
        let universal = CharacterString::from_bytes(
            Variant::UniversalString,
            &[0x00, 0x00, 0x00, 0x48, 0x00, 0x00, 0x00, 0x69],
        )
        .unwrap();
        assert_eq!(universal, "Hi");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let err = CharacterString::new(Variant::Utf8String, vec![0xffu8, 0xfe]).unwrap_err();
        match err {
            CharacterStringError::Decode {
                encoding, bytes, ..
            } => {
                assert_eq!(encoding, Encoding::Utf8);
                assert_eq!(bytes, [0xff, 0xfe]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_initializer() {
        let s = CharacterString::from_display(Variant::NumericString, &12345u32);
        assert_eq!(s, "12345");
        let t = CharacterString::new(Variant::NumericString, Initializer::display(&-7i32)).unwrap();
        assert_eq!(t, "-7");
    }

    #[test]
    fn test_render_never_fails() {
        let s = CharacterString::from_text(Variant::Ia5String, "\u{1f600}");
        assert!(s.to_bytes(true).is_err());
        assert_eq!(s.to_string(), "\u{1f600}");
        assert_eq!(s.as_str(), "\u{1f600}");
    }

    #[test]
    fn test_padding_has_no_effect() {
        let s = CharacterString::from_text(Variant::VisibleString, "abc");
        assert_eq!(s.to_bytes(true).unwrap(), s.to_bytes(false).unwrap());
        assert_eq!(s.as_octets().unwrap(), b"abc");
    }

    #[test]
    fn test_numeric_view_is_bytes_not_chars() {
        let s = CharacterString::from_text(Variant::BmpString, "A\u{e9}");
        assert_eq!(s.to_numbers(true).unwrap(), [0x00, 0x41, 0x00, 0xe9]);
        assert_eq!(s.scalar_values(), [0x41, 0xe9]);
    }

    #[test]
    fn test_equality_ignores_variant() {
        let a = CharacterString::from_text(Variant::Utf8String, "abc");
        let b = CharacterString::from_text(Variant::Ia5String, "abc");
        let c = CharacterString::from_text(Variant::Ia5String, "abd");
        assert_eq!(a, b);
        assert!(a < c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_tag_and_encoding_delegate_to_catalog() {
        let s = CharacterString::from_text(Variant::UniversalString, "x");
        assert_eq!(s.tag(), Tag::universal(28));
        assert_eq!(s.encoding(), Encoding::Utf32Be);
        assert_eq!(s.tag_set(), Variant::UniversalString.tag_set());
    }

    #[test]
    fn test_check_alphabet() {
        assert!(CharacterString::from_text(Variant::NumericString, "123 456")
            .check_alphabet()
            .is_ok());
        assert!(CharacterString::from_text(Variant::NumericString, "12a")
            .check_alphabet()
            .is_err());
        assert!(CharacterString::from_text(Variant::Utf8String, "anything \u{1f600}")
            .check_alphabet()
            .is_ok());
    }

    #[test]
    fn test_check_constraints() {
        let constraints = ConstraintSet::new().size(1, 3);
        let s = CharacterString::from_text(Variant::Utf8String, "abcd");
        assert!(matches!(
            s.check(&constraints),
            Err(CharacterStringError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn test_char_count() {
        let s = CharacterString::from_text(Variant::Utf8String, "café");
        assert_eq!(s.char_count(), 4);
        assert!(!s.is_empty());
        assert!(CharacterString::from_text(Variant::Utf8String, "").is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let s = CharacterString::from_text(Variant::BmpString, "hi");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({"type": "BMPString", "value": "hi"}));
        let parsed: CharacterString = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.variant(), Variant::BmpString);
        assert_eq!(parsed, s);
    }
}
