//! # charstr-core — ASN.1 Restricted Character String Types
//!
//! Values of the ASN.1 restricted character string family (`UTF8String`,
//! `PrintableString`, `BMPString`, ...) and the conversions between their
//! canonical text and their encoding-specific byte form.
//!
//! ## Key Design Principles
//!
//! 1. **One conversion contract.** Every type normalizes input and produces
//!    bytes through the same functions in [`string`]. Types differ only in
//!    the `(tag, encoding)` pair they look up in the catalog.
//!
//! 2. **Single `Variant` enum.** One catalog, exhaustive `match` everywhere.
//!    Alias names (`T61String`, `ISO646String`) are catalog rows that resolve
//!    to an existing variant, not separate types.
//!
//! 3. **Canonical text is the value.** The byte form is derived on demand.
//!    Encoding validity is checked when bytes cross the boundary, never when
//!    a value is built from text.
//!
//! ## Crate Policy
//!
//! - No wire encoding: identifier octets and length prefixes belong to the
//!   BER/DER encoder that consumes [`CharacterString::tag_set`] and
//!   [`CharacterString::to_bytes`].
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod constraint;
pub mod encoding;
pub mod error;
pub mod string;
pub mod tag;
pub mod variant;

// Re-export primary types for ergonomic imports.
pub use constraint::{Alphabet, Constraint, ConstraintSet};
pub use encoding::Encoding;
pub use error::{CharacterStringError, Result};
pub use string::{CharacterString, Initializer};
pub use tag::{Tag, TagClass, TagFormat, TagSet, OCTET_STRING_TAG};
pub use variant::{Variant, VariantDescriptor, CATALOG, ISO646_STRING, T61_STRING, VARIANT_COUNT};
