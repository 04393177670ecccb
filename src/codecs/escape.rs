//! Single-character escape notations.
//!
//! Five notations are supported. [`detect`] tries them in [`EscapeType::ALL`] order and
//! the first notation found anywhere in the text wins. A bare `\41` is a CSS escape but
//! `\u0041` is an escape sequence, which is why escape sequences are tried first.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::entities;
use crate::core::errors::UnknownNameError;

/// Textual notation for a single Unicode code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeType {
    /// `U+1F600`
    CodePoint,
    /// `\u0041` or `\u{1F600}`
    EscapeSequence,
    /// `\41 ` (CSS, optional trailing space)
    CssEscape,
    /// `&#65;` or `&#x41;`
    HtmlCode,
    /// `&amp;`
    HtmlEntity,
}

impl EscapeType {
    /// Detection priority order.
    pub const ALL: [EscapeType; 5] = [
        EscapeType::CodePoint,
        EscapeType::EscapeSequence,
        EscapeType::CssEscape,
        EscapeType::HtmlCode,
        EscapeType::HtmlEntity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EscapeType::CodePoint => "code-point",
            EscapeType::EscapeSequence => "escape-sequence",
            EscapeType::CssEscape => "css-escape",
            EscapeType::HtmlCode => "html-code",
            EscapeType::HtmlEntity => "html-entity",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            EscapeType::CodePoint => &CODE_POINT,
            EscapeType::EscapeSequence => &ESCAPE_SEQUENCE,
            EscapeType::CssEscape => &CSS_ESCAPE,
            EscapeType::HtmlCode => &HTML_CODE,
            EscapeType::HtmlEntity => &HTML_ENTITY,
        }
    }
}

impl fmt::Display for EscapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EscapeType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "code-point" | "codepoint" | "unicode" => Ok(EscapeType::CodePoint),
            "escape-sequence" | "escape" | "js" => Ok(EscapeType::EscapeSequence),
            "css-escape" | "css" => Ok(EscapeType::CssEscape),
            "html-code" | "numeric" => Ok(EscapeType::HtmlCode),
            "html-entity" | "entity" | "html" => Ok(EscapeType::HtmlEntity),
            _ => Err(UnknownNameError::with_candidates(
                "escape type",
                s,
                &EscapeType::ALL.map(|t| t.as_str()),
            )),
        }
    }
}

static CODE_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"U\+([0-9A-Fa-f]{4,6})").unwrap());

static ESCAPE_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u(?:\{([0-9A-Fa-f]{1,6})\}|([0-9A-Fa-f]{4}))").unwrap());

static CSS_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([0-9A-Fa-f]{1,6}) ?").unwrap());

static HTML_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(?:([0-9]+)|[xX]([0-9A-Fa-f]+));").unwrap());

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([A-Za-z0-9]+);").unwrap());

/// Which notation `text` uses, if any.
pub fn detect(text: &str) -> Option<EscapeType> {
    let found = EscapeType::ALL
        .into_iter()
        .find(|t| t.pattern().is_match(text));
    log::debug!("escape detection: {:?}", found);
    found
}

/// Encode every code point of `text` in the given notation.
pub fn encode(text: &str, format: EscapeType) -> String {
    match format {
        EscapeType::CodePoint => text
            .chars()
            .map(|c| format!("U+{:04X}", c as u32))
            .collect::<Vec<_>>()
            .join(" "),
        EscapeType::EscapeSequence => text
            .chars()
            .map(|c| {
                let cp = c as u32;
                if cp > 0xFFFF {
                    format!("\\u{{{:X}}}", cp)
                } else {
                    format!("\\u{:04X}", cp)
                }
            })
            .collect(),
        EscapeType::CssEscape => text
            .chars()
            .map(|c| format!("\\{:04X} ", c as u32))
            .collect(),
        EscapeType::HtmlCode => text.chars().map(|c| format!("&#{};", c as u32)).collect(),
        EscapeType::HtmlEntity => entities::encode_entities(text).replace(' ', "&nbsp;"),
    }
}

/// Decode every escape of one notation found in `text`.
///
/// Without an explicit `format` the notation is detected first. Matches that do not
/// decode are skipped; `None` means nothing decoded at all. Empty input decodes to an
/// empty string.
pub fn decode(text: &str, format: Option<EscapeType>) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }

    let format = format.or_else(|| detect(text))?;
    let values: Vec<u32> = format
        .pattern()
        .captures_iter(text)
        .filter_map(|caps| decode_match(format, &caps))
        .flatten()
        .collect();

    let decoded = join_code_points(&values);
    if decoded.is_empty() { None } else { Some(decoded) }
}

/// Code points for one match. Named references can expand to two.
fn decode_match(format: EscapeType, caps: &Captures<'_>) -> Option<Vec<u32>> {
    let code_point = match format {
        EscapeType::CodePoint | EscapeType::CssEscape => {
            u32::from_str_radix(caps.get(1)?.as_str(), 16).ok()
        }
        EscapeType::EscapeSequence => {
            let hex = caps.get(1).or_else(|| caps.get(2))?;
            u32::from_str_radix(hex.as_str(), 16).ok()
        }
        EscapeType::HtmlCode => match (caps.get(1), caps.get(2)) {
            (Some(dec), _) => dec.as_str().parse().ok(),
            (None, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, None) => None,
        },
        EscapeType::HtmlEntity => {
            let expansion = entities::lookup_name(caps.get(1)?.as_str())?;
            return Some(expansion.chars().map(u32::from).collect());
        }
    };
    code_point.map(|cp| vec![cp])
}

/// Build a string from decoded values. A high surrogate directly followed by a low
/// surrogate forms one code point (`\uD83D\uDE00`); other surrogates and values past
/// U+10FFFF are dropped.
fn join_code_points(values: &[u32]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < values.len() {
        let cp = values[i];
        if (0xD800..0xDC00).contains(&cp)
            && let Some(&low) = values.get(i + 1)
            && (0xDC00..0xE000).contains(&low)
        {
            let combined = 0x10000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
            if let Some(c) = char::from_u32(combined) {
                out.push(c);
            }
            i += 2;
            continue;
        }
        if let Some(c) = char::from_u32(cp) {
            out.push(c);
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_code_point() {
        assert_eq!(encode("A", EscapeType::CodePoint), "U+0041");
        assert_eq!(encode("😀", EscapeType::CodePoint), "U+1F600");
        assert_eq!(encode("Hi", EscapeType::CodePoint), "U+0048 U+0069");
    }

    #[test]
    fn test_encode_escape_sequence() {
        assert_eq!(encode("A", EscapeType::EscapeSequence), "\\u0041");
        assert_eq!(encode("😀", EscapeType::EscapeSequence), "\\u{1F600}");
    }

    #[test]
    fn test_encode_css_and_html_code() {
        assert_eq!(encode("A", EscapeType::CssEscape), "\\0041 ");
        assert_eq!(encode("😀", EscapeType::CssEscape), "\\1F600 ");
        assert_eq!(encode("A😀", EscapeType::HtmlCode), "&#65;&#128512;");
    }

    #[test]
    fn test_encode_html_entity_rewrites_spaces() {
        assert_eq!(encode("a b", EscapeType::HtmlEntity), "a&nbsp;b");
        assert_eq!(encode("<é>", EscapeType::HtmlEntity), "&lt;&eacute;&gt;");
    }

    #[test]
    fn test_detect_priority() {
        assert_eq!(detect("U+0041"), Some(EscapeType::CodePoint));
        assert_eq!(detect("\\u0041"), Some(EscapeType::EscapeSequence));
        assert_eq!(detect("\\u{1F600}"), Some(EscapeType::EscapeSequence));
        assert_eq!(detect("\\41 "), Some(EscapeType::CssEscape));
        assert_eq!(detect("&#65;"), Some(EscapeType::HtmlCode));
        assert_eq!(detect("&#x41;"), Some(EscapeType::HtmlCode));
        assert_eq!(detect("&amp;"), Some(EscapeType::HtmlEntity));
        assert_eq!(detect("plain text"), None);
        // A code point anywhere in the text outranks the other notations
        assert_eq!(detect("&amp; U+0041"), Some(EscapeType::CodePoint));
    }

    #[test]
    fn test_decode_empty_is_empty() {
        assert_eq!(decode("", None), Some(String::new()));
        assert_eq!(decode("", Some(EscapeType::HtmlCode)), Some(String::new()));
    }

    #[test]
    fn test_decode_auto_collects_all_matches() {
        assert_eq!(decode("U+0048 U+0069", None), Some("Hi".to_string()));
        assert_eq!(decode("x U+0048, y U+0069!", None), Some("Hi".to_string()));
        assert_eq!(decode("&#72;&#x69;", None), Some("Hi".to_string()));
    }

    #[test]
    fn test_html5_named_references() {
        assert_eq!(
            decode("&check;&rightarrow;&NotEqual;&star;", None),
            Some("✓→≠☆".to_string())
        );
        assert_eq!(
            decode("&NotEqualTilde;", Some(EscapeType::HtmlEntity)),
            Some("\u{2242}\u{338}".to_string())
        );
        assert_eq!(encode("✓", EscapeType::HtmlEntity), "&check;");
    }

    #[test]
    fn test_decode_skips_bad_matches() {
        // U+110000 is past the Unicode range
        assert_eq!(decode("U+110000 U+0041", None), Some("A".to_string()));
        assert_eq!(decode("&bogus;&amp;", None), Some("&".to_string()));
        assert_eq!(decode("&bogus;", None), None);
    }

    #[test]
    fn test_decode_unknown_notation() {
        assert_eq!(decode("no escapes here", None), None);
        assert_eq!(decode("U+0041", Some(EscapeType::HtmlCode)), None);
    }

    #[test]
    fn test_decode_astral() {
        assert_eq!(decode("\\u{1F600}", None), Some("😀".to_string()));
        assert_eq!(decode("\\1F600 ", None), Some("😀".to_string()));
        assert_eq!(decode("\\uD83D\\uDE00", None), Some("😀".to_string()));
        assert_eq!(decode("&#128512;", None), Some("😀".to_string()));
    }

    #[test]
    fn test_decode_lone_surrogate_skipped() {
        assert_eq!(decode("\\uD83D\\u0041", None), Some("A".to_string()));
    }

    #[test]
    fn test_escape_type_from_str() {
        assert_eq!("css".parse::<EscapeType>().unwrap(), EscapeType::CssEscape);
        assert_eq!(
            "Code_Point".parse::<EscapeType>().unwrap(),
            EscapeType::CodePoint
        );
        let err = "html-entty".parse::<EscapeType>().unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("html-entity"));
    }
}
