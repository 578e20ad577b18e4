//! # Structural Tags
//!
//! ASN.1 identifies every type on the wire by a tag: a class, a format
//! (primitive or constructed) and a number. A [`TagSet`] is the ordered list
//! of tags a type carries once implicit and explicit tagging have been
//! applied, together with the base tag of the underlying universal type.
//!
//! Only the algebra needed by the character string catalog lives here. Turning
//! tags into identifier octets is the wire encoder's job.

use serde::{Deserialize, Serialize};

/// Tag class, carrying the class bits of the identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagClass {
    /// Built-in types defined by X.680.
    Universal,
    /// Application-wide types.
    Application,
    /// Context-specific tags inside a constructed type.
    Context,
    /// Private-use tags.
    Private,
}

impl TagClass {
    /// Class bits as they appear in the identifier octet.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::Context => 0x80,
            Self::Private => 0xC0,
        }
    }

    /// Upper-case name used in tag rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "UNIVERSAL",
            Self::Application => "APPLICATION",
            Self::Context => "CONTEXT",
            Self::Private => "PRIVATE",
        }
    }
}

/// Tag format: primitive (simple) or constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFormat {
    /// Primitive encoding.
    Simple,
    /// Constructed encoding.
    Constructed,
}

impl TagFormat {
    /// Format bit as it appears in the identifier octet.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Simple => 0x00,
            Self::Constructed => 0x20,
        }
    }

    /// Upper-case name used in tag rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::Constructed => "CONSTRUCTED",
        }
    }
}

/// A single `(class, format, number)` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag class.
    pub class: TagClass,
    /// Tag format.
    pub format: TagFormat,
    /// Tag number within the class.
    pub number: u32,
}

/// OCTET STRING, the base type of every character string.
pub const OCTET_STRING_TAG: Tag = Tag::universal(4);

impl Tag {
    /// Create a tag from its three components.
    pub const fn new(class: TagClass, format: TagFormat, number: u32) -> Self {
        Self {
            class,
            format,
            number,
        }
    }

    /// Universal-class primitive tag.
    pub const fn universal(number: u32) -> Self {
        Self::new(TagClass::Universal, TagFormat::Simple, number)
    }

    /// Context-specific primitive tag, as used for `[n] IMPLICIT` fields.
    pub const fn context(number: u32) -> Self {
        Self::new(TagClass::Context, TagFormat::Simple, number)
    }

    /// Same class and number, different format.
    pub const fn with_format(self, format: TagFormat) -> Self {
        Self::new(self.class, format, self.number)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}:{}]",
            self.class.as_str(),
            self.format.as_str(),
            self.number
        )
    }
}

/// Ordered tags of a type, innermost first, plus the base tag.
///
/// Two tag sets are equal when their tag lists are equal. The base tag only
/// records which universal type the set was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSet {
    base: Tag,
    tags: Vec<Tag>,
}

impl TagSet {
    /// Tag set of an untagged universal type.
    pub fn initial(tag: Tag) -> Self {
        Self {
            base: tag,
            tags: vec![tag],
        }
    }

    /// Replace the outermost tag (ASN.1 `IMPLICIT`).
    ///
    /// The replacement inherits the format of the tag it replaces, so
    /// implicitly retagging a primitive type keeps it primitive.
    pub fn tag_implicitly(&self, tag: Tag) -> Self {
        let mut tags = self.tags.clone();
        let tag = match tags.pop() {
            Some(outer) => tag.with_format(outer.format),
            None => tag,
        };
        tags.push(tag);
        Self {
            base: self.base,
            tags,
        }
    }

    /// Wrap in an additional outer tag (ASN.1 `EXPLICIT`).
    ///
    /// Explicit tags always use the constructed format.
    pub fn tag_explicitly(&self, tag: Tag) -> Self {
        let mut tags = self.tags.clone();
        tags.push(tag.with_format(TagFormat::Constructed));
        Self {
            base: self.base,
            tags,
        }
    }

    /// Tag of the universal type this set was derived from.
    pub fn base_tag(&self) -> Tag {
        self.base
    }

    /// All tags, innermost first.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The tag a decoder sees first.
    pub fn outermost(&self) -> Option<Tag> {
        self.tags.last().copied()
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True for a set with no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl Eq for TagSet {}

impl std::hash::Hash for TagSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tags.hash(state);
    }
}

impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::universal(12).to_string(), "[UNIVERSAL:SIMPLE:12]");
        assert_eq!(
            Tag::new(TagClass::Context, TagFormat::Constructed, 3).to_string(),
            "[CONTEXT:CONSTRUCTED:3]"
        );
    }

    #[test]
    fn test_identifier_bits() {
        assert_eq!(TagClass::Universal.bits(), 0x00);
        assert_eq!(TagClass::Application.bits(), 0x40);
        assert_eq!(TagClass::Context.bits(), 0x80);
        assert_eq!(TagClass::Private.bits(), 0xC0);
        assert_eq!(TagFormat::Simple.bits(), 0x00);
        assert_eq!(TagFormat::Constructed.bits(), 0x20);
    }

    #[test]
    fn test_implicit_tagging_replaces_outer_tag() {
        let octets = TagSet::initial(OCTET_STRING_TAG);
        let utf8 = octets.tag_implicitly(Tag::universal(12));

        assert_eq!(utf8.len(), 1);
        assert_eq!(utf8.outermost(), Some(Tag::universal(12)));
        assert_eq!(utf8.base_tag(), OCTET_STRING_TAG);
        assert_ne!(utf8, octets);
    }

    #[test]
    fn test_implicit_tagging_keeps_format() {
        let octets = TagSet::initial(OCTET_STRING_TAG);
        let retagged = octets.tag_implicitly(Tag::new(
            TagClass::Context,
            TagFormat::Constructed,
            0,
        ));
        assert_eq!(retagged.outermost(), Some(Tag::context(0)));
    }

    #[test]
    fn test_explicit_tagging_wraps() {
        let utf8 = TagSet::initial(OCTET_STRING_TAG).tag_implicitly(Tag::universal(12));
        let wrapped = utf8.tag_explicitly(Tag::context(1));

        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped.tags()[0], Tag::universal(12));
        assert_eq!(
            wrapped.outermost(),
            Some(Tag::new(TagClass::Context, TagFormat::Constructed, 1))
        );
        assert_eq!(
            wrapped.to_string(),
            "[UNIVERSAL:SIMPLE:12][CONTEXT:CONSTRUCTED:1]"
        );
    }

    #[test]
    fn test_equality_ignores_base_tag() {
        let a = TagSet::initial(OCTET_STRING_TAG).tag_implicitly(Tag::universal(19));
        let b = TagSet::initial(Tag::universal(19));
        assert_eq!(a, b);
        assert_ne!(a.base_tag(), b.base_tag());
    }

    #[test]
    fn test_serde_roundtrip() {
        let tag = Tag::universal(30);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"class":"universal","format":"simple","number":30}"#);
        let parsed: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tag);
    }
}
