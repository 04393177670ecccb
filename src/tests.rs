use crate::codecs::{base64, color, count, date, escape, uuid};
use crate::codecs::color::ColorFormat;
use crate::codecs::date::{DATE_FORMATS, DateFormatKey};
use crate::codecs::escape::EscapeType;
use crate::codecs::uuid::{UuidOptions, UuidVersion};
use crate::{FormatSelector, SelectionMode};
use chrono::{TimeZone, Utc};
use std::collections::HashSet;

const SAMPLE_CHARS: &[char] = &[
    'A', 'z', '0', ' ', '&', '<', '"', '\u{a9}', '\u{e9}', '\u{3b1}', '\u{416}', '\u{5d0}',
    '\u{4e2d}', '\u{ffff}', '\u{10000}', '\u{1f600}', '\u{1f9a0}', '\u{10ffff}',
];

// Per-code-point notations. HTML entities pass plain ASCII through untouched.
const CODE_POINT_TYPES: [EscapeType; 4] = [
    EscapeType::CodePoint,
    EscapeType::EscapeSequence,
    EscapeType::CssEscape,
    EscapeType::HtmlCode,
];

#[test]
fn test_escape_roundtrip_every_type() {
    for format in CODE_POINT_TYPES {
        for &c in SAMPLE_CHARS {
            let text = c.to_string();
            let encoded = escape::encode(&text, format);
            assert_eq!(
                escape::decode(&encoded, Some(format)).as_deref(),
                Some(text.as_str()),
                "{} failed for U+{:04X} (encoded as {:?})",
                format,
                c as u32,
                encoded
            );
        }
    }
}

#[test]
fn test_html_entity_roundtrip_named_chars() {
    for c in ['&', '<', '"', '\u{a9}', '\u{e9}', '\u{3b1}', '\u{1d538}'] {
        let text = c.to_string();
        let encoded = escape::encode(&text, EscapeType::HtmlEntity);
        assert_eq!(
            escape::decode(&encoded, Some(EscapeType::HtmlEntity)).as_deref(),
            Some(text.as_str())
        );
    }
}

#[test]
fn test_escape_concrete_code_points() {
    assert_eq!(escape::encode("A", EscapeType::CodePoint), "U+0041");
    assert_eq!(escape::encode("😀", EscapeType::CodePoint), "U+1F600");
}

#[test]
fn test_detected_escape_decodes() {
    for format in CODE_POINT_TYPES {
        let encoded = escape::encode("Hi!", format);
        let detected = escape::detect(&encoded).unwrap();
        assert_eq!(detected, format);
        assert_eq!(escape::decode(&encoded, None).as_deref(), Some("Hi!"));
    }
}

#[test]
fn test_base64_roundtrip_through_standard_form() {
    for s in ["SGVsbG8gV29ybGQ=", "SGVsbG8gV29ybGQ", "8J-YgA", "PDw_Pz4-", "YQ=="] {
        let standard = base64::standardize_base64(s);
        let bytes = base64::decode_bytes(&standard).unwrap();
        assert_eq!(base64::bytes_to_base64(&bytes), standard, "input {}", s);
        assert_eq!(base64::decode_bytes(s), Some(bytes));
    }

    let text = base64::base64_to_text("SGVsbG8gV29ybGQ=").unwrap();
    assert_eq!(base64::text_to_base64(&text), "SGVsbG8gV29ybGQ=");
}

#[test]
fn test_base64_standardize_idempotent() {
    for s in ["SGVsbG8gV29ybGQ", "8J-YgA", "PDw_Pz4-", "YWJj", "", "YQ"] {
        let once = base64::standardize_base64(s);
        assert_eq!(base64::standardize_base64(&once), once);
    }
}

#[test]
fn test_base64_validity_scenarios() {
    assert!(base64::is_valid_base64("SGVsbG8gV29ybGQ="));
    assert!(!base64::is_valid_base64("SGVsbG8+V29ybGQ-"));
}

#[test]
fn test_timestamp_formats_ignore_timezone() {
    let date = Utc.with_ymd_and_hms(2021, 7, 4, 18, 5, 9).unwrap();
    let zones = ["UTC", "America/New_York", "Asia/Kolkata", "Pacific/Chatham"];

    for key in [DateFormatKey::TimestampSeconds, DateFormatKey::TimestampMilliseconds] {
        let stringify = key.format().stringify;
        let expected = stringify(&date, None);
        for zone in zones {
            let tz = date::parse_timezone(zone).unwrap();
            assert_eq!(stringify(&date, Some(tz)), expected, "{} in {}", key, zone);
        }
    }
}

#[test]
fn test_rfc7231_always_gmt() {
    let date = Utc.with_ymd_and_hms(2021, 7, 4, 18, 5, 9).unwrap();
    let stringify = DateFormatKey::Rfc7231.format().stringify;
    for zone in ["UTC", "Europe/Berlin", "Australia/Sydney"] {
        let tz = date::parse_timezone(zone).unwrap();
        assert_eq!(stringify(&date, Some(tz)), "Sun, 04 Jul 2021 18:05:09 GMT");
    }
}

#[test]
fn test_timestamp_seconds_digit_bounds() {
    let seconds = DATE_FORMATS
        .iter()
        .find(|f| f.key == DateFormatKey::TimestampSeconds)
        .unwrap();
    assert!((seconds.matches)("9999999999"));
    assert!(!(seconds.matches)("123456789012"));
}

#[test]
fn test_every_rendering_parses_back() {
    let date = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap();
    for (key, rendered) in date::convert_all(&date, None) {
        assert_eq!(
            date::parse_date(&rendered, Some(key)),
            Some(date),
            "{} rendered {:?}",
            key,
            rendered
        );
    }
}

#[test]
fn test_uuid_v5_deterministic() {
    let options = UuidOptions {
        version: UuidVersion::V5,
        namespace: Some("6ba7b811-9dad-11d1-80b4-00c04fd430c8".to_string()),
        name: Some("https://example.com/".to_string()),
        ..UuidOptions::default()
    };
    let first = uuid::generate(&options);
    assert!(uuid::validate(&first));
    assert_eq!(uuid::generate(&options), first);
}

#[test]
fn test_uuid_v4_distinct() {
    let options = UuidOptions::default();
    let ids: HashSet<String> = (0..10).map(|_| uuid::generate(&options)).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_uuid_nil() {
    let options = UuidOptions {
        version: UuidVersion::Nil,
        ..UuidOptions::default()
    };
    assert_eq!(uuid::generate(&options), "00000000-0000-0000-0000-000000000000");
}

#[test]
fn test_count_hello_world() {
    let counts = count::count("Hello, world!");
    assert_eq!(counts.total, 13);
    assert_eq!(counts.words, 2);
    assert_eq!(counts.lines, 1);
    assert_eq!(counts.latin, 10);
    assert_eq!(counts.symbols, 2);
    assert_eq!(counts.whitespace, 1);
    assert_eq!(counts.digit, 0);
    assert_eq!(counts.non_latin, 0);
}

#[test]
fn test_color_format_scenarios() {
    assert_eq!(color::get_color_format("red"), None);
    assert_eq!(color::get_color_format("#ff0000"), Some(ColorFormat::Hex));
}

#[test]
fn test_color_conversions_reparse() {
    let original = color::parse_color("#3296fa").unwrap();
    for (format, rendered) in color::convert_all(&original) {
        assert_eq!(color::get_color_format(&rendered), Some(format), "{}", rendered);
        let reparsed = color::parse_color(&rendered).unwrap();
        assert!((reparsed.r - original.r).abs() < 3.0, "{}", rendered);
        assert!((reparsed.g - original.g).abs() < 3.0, "{}", rendered);
        assert!((reparsed.b - original.b).abs() < 3.0, "{}", rendered);
    }
}

#[test]
fn test_selector_with_escape_detection() {
    let mut selector = FormatSelector::new();
    assert_eq!(selector.on_input("&#65;", escape::detect), Some(EscapeType::HtmlCode));

    selector.choose(EscapeType::CodePoint);
    assert_eq!(selector.mode(), SelectionMode::Manual(EscapeType::CodePoint));
    assert_eq!(selector.on_input("&#65;", escape::detect), Some(EscapeType::CodePoint));

    assert_eq!(selector.set_auto("&amp;", escape::detect), Some(EscapeType::HtmlEntity));
    assert!(selector.is_auto());
}
