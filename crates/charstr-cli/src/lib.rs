//! # charstr-cli — CLI Tool for ASN.1 Character Strings
//!
//! Provides the `charstr` command-line interface over `charstr-core`.
//!
//! ## Subcommands
//!
//! - `charstr encode` — Text to the byte form of a string type, as hex.
//! - `charstr decode` — Hex byte form back to canonical text.
//! - `charstr numbers` — Canonical text from byte values given as integers.
//! - `charstr catalog` — The type catalog: names, tags, encodings, aliases.
//!
//! ```bash
//! charstr encode --type bmp "Ж€"
//! charstr decode --type UTF8String 636166c3a9
//! charstr numbers --type ia5 72 101 108 108 111
//! charstr catalog --json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from conversion logic, which lives in
//!   `charstr-core`.
//! - Handlers return the process exit code; errors propagate to `main`.

pub mod catalog;
pub mod config;
pub mod decode;
pub mod encode;

use anyhow::{bail, Context, Result};
use charstr_core::Variant;

use crate::config::CliConfig;

/// Variant used when neither the command line nor the config names one.
pub const DEFAULT_VARIANT: Variant = Variant::Utf8String;

/// Pick the variant: command line first, then config file, then default.
pub fn resolve_variant(requested: Option<Variant>, config: &CliConfig) -> Variant {
    requested
        .or(config.default_variant)
        .unwrap_or(DEFAULT_VARIANT)
}

/// Render bytes as contiguous hex.
pub fn to_hex(bytes: &[u8], uppercase: bool) -> String {
    bytes
        .iter()
        .map(|b| {
            if uppercase {
                format!("{b:02X}")
            } else {
                format!("{b:02x}")
            }
        })
        .collect()
}

/// Parse hex into bytes.
///
/// Accepts an optional `0x` prefix and ignores ASCII whitespace, so
/// `"0x63 61 66"` and `"636166"` are equivalent.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    if !digits.is_ascii() {
        bail!("hex input contains non-ASCII characters: {input:?}");
    }
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits: {}", digits.len());
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?} at offset {i}", &digits[i..i + 2]))
        })
        .collect()
}
