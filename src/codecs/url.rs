//! Percent-encoding in the style of `encodeURIComponent`.

use once_cell::sync::Lazy;
use regex::Regex;

static PERCENT_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").unwrap());

/// Characters `encodeURIComponent` leaves alone on top of the RFC 3986 unreserved set.
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// True when `text` holds at least one `%XX` sequence and decodes cleanly.
///
/// Text without any percent sequence is not considered encoded, so auto mode falls
/// back to encoding it.
pub fn is_valid_url_encoded(text: &str) -> bool {
    PERCENT_PAIR.is_match(text) && decode_from_url(text).is_some()
}

/// Percent-encode `text`. Every Rust string is valid Unicode, so this cannot fail.
pub fn encode_to_url(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).into_owned();
    for (escaped, literal) in EXTRA_UNRESERVED {
        encoded = encoded.replace(escaped, literal);
    }
    encoded
}

/// Decode percent-escapes. `None` for a stray `%` or bytes that are not UTF-8;
/// an empty input is `Some("")`.
pub fn decode_from_url(text: &str) -> Option<String> {
    if !has_well_formed_escapes(text) {
        log::debug!("url decode: malformed percent escape");
        return None;
    }
    urlencoding::decode(text).ok().map(|s| s.into_owned())
}

/// Decode when the input looks encoded, encode otherwise.
pub fn auto_convert(text: &str) -> Option<String> {
    if is_valid_url_encoded(text) {
        decode_from_url(text)
    } else {
        Some(encode_to_url(text))
    }
}

fn has_well_formed_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
