//! Base64 validation, alphabet conversion and content classification.
//!
//! The standard alphabet with `=` padding is the canonical form; URL-safe input is
//! standardized before anything else happens to it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::signatures::{self, FileSignature};

static BASE64_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/_-]+={0,2}$").unwrap());

/// Minimum share of printable UTF-16 units for decoded text to count as meaningful.
const PRINTABLE_THRESHOLD: f64 = 0.7;

/// Strict syntactic check.
///
/// Rejects a length of 1 mod 4, characters outside both alphabets, more than two
/// trailing `=`, and strings mixing `+`/`/` with `-`/`_`. Finally the standardized form
/// must survive decode→encode unchanged, which catches non-canonical trailing bits.
pub fn is_valid_base64(text: &str) -> bool {
    if text.is_empty() || text.len() % 4 == 1 || !BASE64_CHARS.is_match(text) {
        return false;
    }

    let has_standard = text.contains(['+', '/']);
    let has_url_safe = text.contains(['-', '_']);
    if has_standard && has_url_safe {
        return false;
    }

    let standardized = standardize_base64(text);
    match STANDARD.decode(&standardized) {
        Ok(bytes) => STANDARD.encode(bytes) == standardized,
        Err(_) => false,
    }
}

/// Whether `text` is valid Base64 that decodes to something worth showing.
///
/// UTF-8 content must be mostly printable; binary content must carry a known file
/// signature. Valid Base64 of arbitrary binary is rejected.
pub fn is_probably_base64(text: &str) -> bool {
    if !is_valid_base64(text) {
        return false;
    }
    let Some(bytes) = decode_bytes(text) else {
        return false;
    };

    match std::str::from_utf8(&bytes) {
        Ok(decoded) => {
            let ratio = printable_ratio(decoded);
            log::debug!("base64 content is UTF-8, printable ratio {:.2}", ratio);
            ratio > PRINTABLE_THRESHOLD
        }
        Err(_) => {
            let signature = signatures::detect_file_type(&bytes);
            log::debug!("base64 content is binary, signature {:?}", signature);
            signature.is_some()
        }
    }
}

/// Share of UTF-16 code units in the printable bands (32–126 and 160–65533).
fn printable_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut printable = 0usize;
    for unit in text.encode_utf16() {
        total += 1;
        if (32..=126).contains(&unit) || (160..=65533).contains(&unit) {
            printable += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    printable as f64 / total as f64
}

/// File extension of the decoded payload, if its signature is recognised.
pub fn detect_file_extension(text: &str) -> Option<&'static str> {
    detect_file_type(text).map(|sig| sig.extension)
}

/// File type of the decoded payload, if its signature is recognised.
pub fn detect_file_type(text: &str) -> Option<FileSignature> {
    decode_bytes(text).and_then(|bytes| signatures::detect_file_type(&bytes))
}

/// Standard alphabet to URL-safe alphabet, padding removed.
pub fn convert_to_url_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// URL-safe alphabet to standard alphabet, padding restored.
pub fn standardize_base64(text: &str) -> String {
    let mut standardized: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    match standardized.len() % 4 {
        2 => standardized.push_str("=="),
        3 => standardized.push('='),
        _ => {}
    }
    standardized
}

/// UTF-8 encode and Base64 encode (standard alphabet, padded).
pub fn text_to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Base64 encode raw bytes, e.g. a file's contents.
pub fn bytes_to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode either alphabet to bytes.
pub fn decode_bytes(text: &str) -> Option<Vec<u8>> {
    STANDARD.decode(standardize_base64(text.trim())).ok()
}

/// Decode to text. Invalid UTF-8 sequences become U+FFFD.
pub fn base64_to_text(text: &str) -> Option<String> {
    decode_bytes(text).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Decoded payload together with its sniffed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blob {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub size: usize,
    pub mime: &'static str,
    pub extension: Option<&'static str>,
}

/// Decode to a blob. Unrecognised payloads get `application/octet-stream`.
pub fn base64_to_blob(text: &str) -> Option<Blob> {
    let bytes = decode_bytes(text)?;
    let signature = signatures::detect_file_type(&bytes);
    Some(Blob {
        size: bytes.len(),
        mime: signature.map_or("application/octet-stream", |s| s.mime),
        extension: signature.map(|s| s.extension),
        bytes,
    })
}

/// Everything the inspector shows about a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Base64Report {
    pub valid: bool,
    pub probably_base64: bool,
    pub url_safe: bool,
    pub decoded_size: Option<usize>,
    pub file_type: Option<FileSignature>,
}

pub fn inspect(text: &str) -> Base64Report {
    let text = text.trim();
    let valid = is_valid_base64(text);
    let decoded = if valid { decode_bytes(text) } else { None };
    Base64Report {
        valid,
        probably_base64: is_probably_base64(text),
        url_safe: valid && text.contains(['-', '_']),
        decoded_size: decoded.as_ref().map(Vec::len),
        file_type: decoded
            .as_deref()
            .and_then(signatures::detect_file_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_base64() {
        assert!(is_valid_base64("SGVsbG8gV29ybGQ="));
        assert!(is_valid_base64("SGVsbG8gV29ybGQ"));
        assert!(is_valid_base64("-_-_"));
        assert!(!is_valid_base64("SGVsbG8+V29ybGQ-"));
        assert!(!is_valid_base64(""));
        assert!(!is_valid_base64("SGVsb"));
        assert!(!is_valid_base64("SGVsbG8gV29ybGQ==="));
        assert!(!is_valid_base64("SGVs bG8="));
    }

    #[test]
    fn test_non_canonical_bits_rejected() {
        // "QQ==" is canonical for "A"; "QR==" carries stray low bits
        assert!(is_valid_base64("QQ=="));
        assert!(!is_valid_base64("QR=="));
    }

    #[test]
    fn test_standardize_padding() {
        assert_eq!(standardize_base64("QQ"), "QQ==");
        assert_eq!(standardize_base64("QUI"), "QUI=");
        assert_eq!(standardize_base64("QUJD"), "QUJD");
        assert_eq!(standardize_base64("-_8"), "+/8=");
    }

    #[test]
    fn test_convert_to_url_safe() {
        assert_eq!(convert_to_url_safe("+/8="), "-_8");
        assert_eq!(convert_to_url_safe("QQ=="), "QQ");
    }

    #[test]
    fn test_text_round_trip() {
        let encoded = text_to_base64("Hello World");
        assert_eq!(encoded, "SGVsbG8gV29ybGQ=");
        assert_eq!(base64_to_text(&encoded).as_deref(), Some("Hello World"));
        assert_eq!(base64_to_text("SGVsbG8gV29ybGQ").as_deref(), Some("Hello World"));
        assert_eq!(base64_to_text("!!!"), None);
    }

    #[test]
    fn test_probably_base64_text() {
        assert!(is_probably_base64("SGVsbG8gV29ybGQ="));
        // Valid syntax, but "abcd" decodes to unprintable binary with no signature
        assert!(is_valid_base64("abcd"));
        assert!(!is_probably_base64("abcd"));
    }

    #[test]
    fn test_probably_base64_file_signature() {
        let png = bytes_to_base64(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\xff\xfe");
        assert!(is_probably_base64(&png));
        assert_eq!(detect_file_extension(&png), Some("png"));
    }

    #[test]
    fn test_printable_ratio_counts_utf16_units() {
        assert_eq!(printable_ratio("ab"), 1.0);
        assert_eq!(printable_ratio("a\u{0}"), 0.5);
        // Surrogate halves of an emoji sit inside the 160–65533 band
        assert_eq!(printable_ratio("😀"), 1.0);
        assert_eq!(printable_ratio(""), 0.0);
    }

    #[test]
    fn test_base64_to_blob() {
        let blob = base64_to_blob("JVBERi0xLjQK").unwrap();
        assert_eq!(blob.bytes, b"%PDF-1.4\n");
        assert_eq!(blob.mime, "application/pdf");
        assert_eq!(blob.extension, Some("pdf"));

        let plain = base64_to_blob("SGk=").unwrap();
        assert_eq!(plain.mime, "application/octet-stream");
        assert_eq!(plain.extension, None);
    }

    #[test]
    fn test_inspect() {
        let report = inspect("SGVsbG8gV29ybGQ=");
        assert!(report.valid);
        assert!(report.probably_base64);
        assert!(!report.url_safe);
        assert_eq!(report.decoded_size, Some(11));
        assert_eq!(report.file_type, None);

        let report = inspect("not base64!");
        assert!(!report.valid);
        assert_eq!(report.decoded_size, None);
    }
}
