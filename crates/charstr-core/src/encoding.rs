//! # Character Encodings
//!
//! The four codecs used by the character string catalog. Each variant in the
//! catalog names exactly one of these; the conversion code never branches on
//! the variant itself.
//!
//! | Encoding | Code unit | Rejects on decode |
//! |----------|-----------|-------------------|
//! | `us-ascii` | 1 byte | any byte above `0x7F` |
//! | `utf-8` | 1 byte | malformed or overlong sequences |
//! | `utf-16-be` | 2 bytes | odd length, unpaired surrogates |
//! | `utf-32-be` | 4 bytes | length not a multiple of 4, surrogates, values above U+10FFFF |
//!
//! Encoding canonical text only fails for `us-ascii`. The UTF-16 codec writes
//! surrogate pairs for characters outside the Basic Multilingual Plane, so
//! every valid byte sequence round-trips byte-for-byte through decode then
//! encode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{CharacterStringError, Result};

/// A character encoding identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// 7-bit US-ASCII. Default for the legacy string types.
    #[default]
    #[serde(rename = "us-ascii")]
    Ascii,
    /// UTF-8.
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16, big-endian, no byte order mark.
    #[serde(rename = "utf-16-be")]
    Utf16Be,
    /// UTF-32, big-endian, no byte order mark.
    #[serde(rename = "utf-32-be")]
    Utf32Be,
}

impl Encoding {
    /// Canonical codec name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "us-ascii",
            Self::Utf8 => "utf-8",
            Self::Utf16Be => "utf-16-be",
            Self::Utf32Be => "utf-32-be",
        }
    }

    /// Width in bytes of one code unit.
    pub const fn code_unit_len(self) -> usize {
        match self {
            Self::Ascii | Self::Utf8 => 1,
            Self::Utf16Be => 2,
            Self::Utf32Be => 4,
        }
    }

    /// Encode text into this encoding's byte form.
    ///
    /// # Errors
    ///
    /// Returns `CharacterStringError::Encode` when `text` holds a character
    /// this encoding cannot represent. Only `us-ascii` can fail.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Ascii => {
                if let Some((offset, _)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
                    return Err(CharacterStringError::Encode {
                        encoding: self,
                        text: text.to_string(),
                        offset,
                    });
                }
                Ok(text.as_bytes().to_vec())
            }
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Self::Utf32Be => Ok(text
                .chars()
                .flat_map(|c| u32::from(c).to_be_bytes())
                .collect()),
        }
    }

    /// Decode this encoding's byte form into text.
    ///
    /// # Errors
    ///
    /// Returns `CharacterStringError::Decode` carrying the full input and the
    /// offset of the first byte that could not be decoded.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        let decoded = match self {
            Self::Ascii => decode_ascii(bytes),
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| e.valid_up_to()),
            Self::Utf16Be => decode_utf16_be(bytes),
            Self::Utf32Be => decode_utf32_be(bytes),
        };
        decoded.map_err(|offset| CharacterStringError::Decode {
            encoding: self,
            bytes: bytes.to_vec(),
            offset,
        })
    }
}

fn decode_ascii(bytes: &[u8]) -> std::result::Result<String, usize> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(offset) => Err(offset),
        None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn decode_utf16_be(bytes: &[u8]) -> std::result::Result<String, usize> {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

    let mut text = String::with_capacity(bytes.len() / 2);
    let mut consumed = 0usize;
    for result in char::decode_utf16(units) {
        match result {
            Ok(c) => {
                consumed += c.len_utf16();
                text.push(c);
            }
            Err(_) => return Err(consumed * 2),
        }
    }

    if bytes.len() % 2 != 0 {
        return Err(bytes.len() - 1);
    }
    Ok(text)
}

fn decode_utf32_be(bytes: &[u8]) -> std::result::Result<String, usize> {
    let mut text = String::with_capacity(bytes.len() / 4);
    for (index, quad) in bytes.chunks_exact(4).enumerate() {
        let value = u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]);
        match char::from_u32(value) {
            Some(c) => text.push(c),
            None => return Err(index * 4),
        }
    }

    let trailing = bytes.len() % 4;
    if trailing != 0 {
        return Err(bytes.len() - trailing);
    }
    Ok(text)
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = CharacterStringError;

    /// Parse a codec name. Matching is case-insensitive and accepts the
    /// common spellings without separators.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us-ascii" | "ascii" => Ok(Self::Ascii),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16-be" | "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            "utf-32-be" | "utf-32be" | "utf32be" => Ok(Self::Utf32Be),
            _ => Err(CharacterStringError::UnknownEncoding(s.to_string())),
        }
    }
}
