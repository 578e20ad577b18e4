//! # Catalog Scenarios
//!
//! Concrete vectors for the character string catalog: known byte forms,
//! the late failure of restricted types on unencodable text, and alias
//! identity across the full public API.

use charstr_core::variant::{entries, lookup};
use charstr_core::{
    CharacterString, CharacterStringError, Encoding, Tag, TagClass, TagFormat, Variant,
    ISO646_STRING, T61_STRING,
};

#[test]
fn ia5_string_from_byte_values() {
    let value = Variant::Ia5String.value(vec![72i64, 101, 108, 108, 111]).unwrap();
    assert_eq!(value.as_str(), "Hello");
    assert_eq!(value.to_bytes(true).unwrap(), [72, 101, 108, 108, 111]);
    assert_eq!(value.to_numbers(true).unwrap(), [72, 101, 108, 108, 111]);
}

#[test]
fn utf8_string_cafe() {
    let value = Variant::Utf8String.value("caf\u{00e9}").unwrap();
    assert_eq!(value.as_str(), "café");
    assert_eq!(
        value.to_bytes(true).unwrap(),
        [0x63, 0x61, 0x66, 0xc3, 0xa9]
    );

    let printable = CharacterString::from_text(Variant::PrintableString, value.as_str());
    let err = printable.to_bytes(true).unwrap_err();
    assert!(matches!(
        err,
        CharacterStringError::Encode {
            encoding: Encoding::Ascii,
            ..
        }
    ));
}

#[test]
fn restricted_types_fail_only_on_encode() {
    for variant in [
        Variant::NumericString,
        Variant::PrintableString,
        Variant::Ia5String,
    ] {
        let value = CharacterString::new(variant, "naïve").unwrap();
        assert_eq!(value.to_string(), "naïve");
        assert!(value.to_bytes(true).is_err(), "{variant}");
        assert!(value.to_numbers(true).is_err(), "{variant}");
    }
}

#[test]
fn bmp_string_vectors() {
    let value = Variant::BmpString.value("Ж€").unwrap();
    assert_eq!(value.to_bytes(true).unwrap(), [0x04, 0x16, 0x20, 0xac]);

    let err = CharacterString::from_bytes(Variant::BmpString, &[0x04, 0x16, 0x20]).unwrap_err();
    assert!(matches!(
        err,
        CharacterStringError::Decode {
            encoding: Encoding::Utf16Be,
            offset: 2,
            ..
        }
    ));
}

#[test]
fn universal_string_vectors() {
    let value = Variant::UniversalString.value("Ж").unwrap();
    assert_eq!(value.to_bytes(true).unwrap(), [0x00, 0x00, 0x04, 0x16]);

    let err =
        CharacterString::from_bytes(Variant::UniversalString, &[0x00, 0x00, 0x04]).unwrap_err();
    assert!(matches!(
        err,
        CharacterStringError::Decode {
            encoding: Encoding::Utf32Be,
            ..
        }
    ));
}

#[test]
fn utf8_string_rejects_truncated_sequence() {
    let err = Variant::Utf8String.value(vec![0x63u8, 0xc3]).unwrap_err();
    assert!(matches!(
        err,
        CharacterStringError::Decode {
            encoding: Encoding::Utf8,
            offset: 1,
            ..
        }
    ));
}

#[test]
fn byte_value_out_of_range_is_initializer_error() {
    let err = CharacterString::from_numbers(Variant::Utf8String, [104i64, 105, 1000]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad UTF8String initializer: element 1000 at index 2 is out of byte range"
    );
}

#[test]
fn every_tag_is_universal_primitive() {
    for descriptor in entries() {
        assert_eq!(descriptor.tag.class, TagClass::Universal);
        assert_eq!(descriptor.tag.format, TagFormat::Simple);
        assert!(matches!(
            descriptor.tag.number,
            12 | 18 | 19 | 20 | 21 | 22 | 25 | 26 | 27 | 28 | 30
        ));
    }
}

#[test]
fn aliases_are_name_bindings() {
    assert_eq!(T61_STRING, Variant::TeletexString);
    assert_eq!(ISO646_STRING, Variant::VisibleString);

    for (alias, target) in [("T61String", "TeletexString"), ("ISO646String", "VisibleString")] {
        let a = lookup(alias).unwrap();
        let t = lookup(target).unwrap();
        assert_eq!(a.variant, t.variant);
        assert_eq!(a.tag, t.tag);
        assert_eq!(a.encoding, t.encoding);
        assert_eq!(a.alias_of, Some(t.name));

        for input in ["plain", "caf\u{e9}", ""] {
            let x = CharacterString::new(a.variant, input).unwrap();
            let y = CharacterString::new(t.variant, input).unwrap();
            assert_eq!(x.tag_set(), y.tag_set());
            assert_eq!(x.to_bytes(true), y.to_bytes(true));
        }
    }
    assert_eq!(lookup("ISO646String").unwrap().tag, Tag::universal(26));
}

#[test]
fn value_serializes_with_catalog_name() {
    let value = CharacterString::from_text(T61_STRING, "telex");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"type":"TeletexString","value":"telex"}"#);
}
