//! # Variant Catalog — Single Source of Truth
//!
//! Every restricted character string type is a pair of static facts: a
//! universal tag number and a character encoding. [`Variant`] enumerates the
//! distinct types and [`CATALOG`] binds the names under which they are known,
//! including the two alias names (`T61String`, `ISO646String`) which resolve
//! to an existing variant and behave identically to it.
//!
//! | Name | Tag | Encoding |
//! |------|-----|----------|
//! | UTF8String | 12 | utf-8 |
//! | NumericString | 18 | us-ascii |
//! | PrintableString | 19 | us-ascii |
//! | TeletexString | 20 | us-ascii |
//! | T61String | 20 | alias of TeletexString |
//! | VideotexString | 21 | us-ascii |
//! | IA5String | 22 | us-ascii |
//! | GraphicString | 25 | us-ascii |
//! | VisibleString | 26 | us-ascii |
//! | ISO646String | 26 | alias of VisibleString |
//! | GeneralString | 27 | us-ascii |
//! | UniversalString | 28 | utf-32-be |
//! | BMPString | 30 | utf-16-be |
//!
//! Adding a type means adding an enum variant and a catalog row; the
//! conversion code in [`crate::string`] takes only the `(tag, encoding)` pair.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constraint::Alphabet;
use crate::encoding::Encoding;
use crate::error::CharacterStringError;
use crate::string::{CharacterString, Initializer};
use crate::tag::{Tag, TagSet, OCTET_STRING_TAG};

/// The distinct restricted character string types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// `UTF8String`, universal 12.
    #[serde(rename = "UTF8String")]
    Utf8String,
    /// `NumericString`, universal 18.
    NumericString,
    /// `PrintableString`, universal 19.
    PrintableString,
    /// `TeletexString` (also known as `T61String`), universal 20.
    TeletexString,
    /// `VideotexString`, universal 21.
    VideotexString,
    /// `IA5String`, universal 22.
    #[serde(rename = "IA5String")]
    Ia5String,
    /// `GraphicString`, universal 25.
    GraphicString,
    /// `VisibleString` (also known as `ISO646String`), universal 26.
    VisibleString,
    /// `GeneralString`, universal 27.
    GeneralString,
    /// `UniversalString`, universal 28.
    UniversalString,
    /// `BMPString`, universal 30.
    #[serde(rename = "BMPString")]
    BmpString,
}

/// `T61String` is another name for `TeletexString`.
pub const T61_STRING: Variant = Variant::TeletexString;

/// `ISO646String` is another name for `VisibleString`.
pub const ISO646_STRING: Variant = Variant::VisibleString;

/// Static facts about one catalog name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantDescriptor {
    /// ASN.1 type name.
    pub name: &'static str,
    /// Variant the name resolves to.
    pub variant: Variant,
    /// Universal tag of the type.
    pub tag: Tag,
    /// Encoding used for the byte form.
    pub encoding: Encoding,
    /// Canonical name when this entry is an alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<&'static str>,
}

impl VariantDescriptor {
    /// True for alias names.
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

const fn entry(
    name: &'static str,
    variant: Variant,
    number: u32,
    encoding: Encoding,
) -> VariantDescriptor {
    VariantDescriptor {
        name,
        variant,
        tag: Tag::universal(number),
        encoding,
        alias_of: None,
    }
}

const fn alias(name: &'static str, of: &VariantDescriptor) -> VariantDescriptor {
    VariantDescriptor {
        name,
        variant: of.variant,
        tag: of.tag,
        encoding: of.encoding,
        alias_of: Some(of.name),
    }
}

const UTF8: VariantDescriptor = entry("UTF8String", Variant::Utf8String, 12, Encoding::Utf8);
const NUMERIC: VariantDescriptor =
    entry("NumericString", Variant::NumericString, 18, Encoding::Ascii);
const PRINTABLE: VariantDescriptor =
    entry("PrintableString", Variant::PrintableString, 19, Encoding::Ascii);
const TELETEX: VariantDescriptor =
    entry("TeletexString", Variant::TeletexString, 20, Encoding::Ascii);
const VIDEOTEX: VariantDescriptor =
    entry("VideotexString", Variant::VideotexString, 21, Encoding::Ascii);
const IA5: VariantDescriptor = entry("IA5String", Variant::Ia5String, 22, Encoding::Ascii);
const GRAPHIC: VariantDescriptor =
    entry("GraphicString", Variant::GraphicString, 25, Encoding::Ascii);
const VISIBLE: VariantDescriptor =
    entry("VisibleString", Variant::VisibleString, 26, Encoding::Ascii);
const GENERAL: VariantDescriptor =
    entry("GeneralString", Variant::GeneralString, 27, Encoding::Ascii);
const UNIVERSAL: VariantDescriptor =
    entry("UniversalString", Variant::UniversalString, 28, Encoding::Utf32Be);
const BMP: VariantDescriptor = entry("BMPString", Variant::BmpString, 30, Encoding::Utf16Be);

/// Every catalog name, in tag-number order with aliases after their target.
pub static CATALOG: [VariantDescriptor; 13] = [
    UTF8,
    NUMERIC,
    PRINTABLE,
    TELETEX,
    alias("T61String", &TELETEX),
    VIDEOTEX,
    IA5,
    GRAPHIC,
    VISIBLE,
    alias("ISO646String", &VISIBLE),
    GENERAL,
    UNIVERSAL,
    BMP,
];

/// Number of distinct variants (catalog entries minus aliases).
pub const VARIANT_COUNT: usize = 11;

impl Variant {
    /// All distinct variants in tag-number order.
    pub fn all() -> &'static [Variant] {
        &[
            Self::Utf8String,
            Self::NumericString,
            Self::PrintableString,
            Self::TeletexString,
            Self::VideotexString,
            Self::Ia5String,
            Self::GraphicString,
            Self::VisibleString,
            Self::GeneralString,
            Self::UniversalString,
            Self::BmpString,
        ]
    }

    /// Canonical catalog entry for this variant.
    pub const fn descriptor(self) -> &'static VariantDescriptor {
        match self {
            Self::Utf8String => &UTF8,
            Self::NumericString => &NUMERIC,
            Self::PrintableString => &PRINTABLE,
            Self::TeletexString => &TELETEX,
            Self::VideotexString => &VIDEOTEX,
            Self::Ia5String => &IA5,
            Self::GraphicString => &GRAPHIC,
            Self::VisibleString => &VISIBLE,
            Self::GeneralString => &GENERAL,
            Self::UniversalString => &UNIVERSAL,
            Self::BmpString => &BMP,
        }
    }

    /// ASN.1 type name.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Universal tag of the type.
    pub const fn tag(self) -> Tag {
        self.descriptor().tag
    }

    /// Encoding of the byte form.
    pub const fn encoding(self) -> Encoding {
        self.descriptor().encoding
    }

    /// OCTET STRING tag set implicitly retagged with this variant's tag.
    pub fn tag_set(self) -> TagSet {
        TagSet::initial(OCTET_STRING_TAG).tag_implicitly(self.tag())
    }

    /// Variant carrying the given universal tag number.
    pub fn from_tag_number(number: u32) -> Result<Self, CharacterStringError> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.tag().number == number)
            .ok_or_else(|| CharacterStringError::UnknownVariant(format!("universal tag {number}")))
    }

    /// Characters X.680 permits for this type, where the permitted set is a
    /// fixed alphabet. Returns `None` for types whose repertoire depends on
    /// escape sequences or on the full Unicode range.
    pub fn permitted_alphabet(self) -> Option<Alphabet> {
        match self {
            Self::NumericString => Some(Alphabet::chars("0123456789 ")),
            Self::PrintableString => Some(Alphabet::ranges(&[
                ('A', 'Z'),
                ('a', 'z'),
                ('0', '9'),
                (' ', ' '),
                ('\'', ')'),
                ('+', '/'),
                (':', ':'),
                ('=', '='),
                ('?', '?'),
            ])),
            Self::Ia5String => Some(Alphabet::ranges(&[('\u{0}', '\u{7f}')])),
            Self::VisibleString => Some(Alphabet::ranges(&[(' ', '~')])),
            _ => None,
        }
    }

    /// Build a value of this variant. See [`CharacterString::new`].
    pub fn value(
        self,
        init: impl Into<Initializer>,
    ) -> Result<CharacterString, CharacterStringError> {
        CharacterString::new(self, init)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CharacterStringError;

    /// Resolve a catalog name, alias names included.
    ///
    /// Matching ignores case, `-` and `_`, and a trailing `String`, so
    /// `BMPString`, `bmp-string` and `bmp` all resolve to [`Variant::BmpString`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
            .map(|d| d.variant)
            .ok_or_else(|| CharacterStringError::UnknownVariant(s.to_string()))
    }
}

fn fold_name(name: &str) -> String {
    let folded: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match folded.strip_suffix("string") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => folded,
    }
}

/// Find the catalog entry for a name.
pub fn lookup(name: &str) -> Option<&'static VariantDescriptor> {
    let wanted = fold_name(name);
    CATALOG.iter().find(|d| fold_name(d.name) == wanted)
}

/// All catalog entries, aliases included.
pub fn entries() -> &'static [VariantDescriptor] {
    &CATALOG
}

/// Alias names that resolve to `variant`.
pub fn aliases_of(variant: Variant) -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .filter(move |d| d.is_alias() && d.variant == variant)
        .map(|d| d.name)
}
