//! Character statistics.
//!
//! Category counts are regex match counts over the raw text, so a grapheme cluster
//! such as a ZWJ emoji sequence contributes one match per constituent code point
//! that falls in the category.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ECMAScript `\s`. Unicode White_Space differs: it has U+0085 and lacks U+FEFF.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]",
    )
    .unwrap()
});
static LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Latin}").unwrap());
static NON_LATIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{Greek}\p{Cyrillic}\p{Armenian}\p{Hebrew}\p{Arabic}\p{Devanagari}\p{Bengali}\p{Tamil}\p{Thai}\p{Georgian}\p{Ethiopic}\p{Hangul}\p{Hiragana}\p{Katakana}\p{Han}]",
    )
    .unwrap()
});
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Nd}&&\p{Common}]").unwrap());
// Punctuation and symbols outside any script, which includes emoji
static SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[\p{P}\p{S}]&&\p{Common}]").unwrap());

/// Counts for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCount {
    /// Unicode scalar values
    pub total: usize,
    pub words: usize,
    /// `\n`-separated segments, so a trailing newline adds an empty line
    pub lines: usize,
    pub whitespace: usize,
    pub latin: usize,
    pub non_latin: usize,
    pub digit: usize,
    pub symbols: usize,
}

pub fn count(text: &str) -> TextCount {
    TextCount {
        total: text.chars().count(),
        words: WHITESPACE.split(text).filter(|w| !w.is_empty()).count(),
        lines: text.split('\n').count(),
        whitespace: WHITESPACE.find_iter(text).count(),
        latin: LATIN.find_iter(text).count(),
        non_latin: NON_LATIN.find_iter(text).count(),
        digit: DIGIT.find_iter(text).count(),
        symbols: SYMBOLS.find_iter(text).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        assert_eq!(
            count("Hello, world!"),
            TextCount {
                total: 13,
                words: 2,
                lines: 1,
                whitespace: 1,
                latin: 10,
                non_latin: 0,
                digit: 0,
                symbols: 2,
            }
        );
    }

    #[test]
    fn test_empty() {
        let c = count("");
        assert_eq!(c.total, 0);
        assert_eq!(c.words, 0);
        // split on an empty string still yields one segment
        assert_eq!(c.lines, 1);
    }

    #[test]
    fn test_trailing_newline_adds_line() {
        assert_eq!(count("a\nb").lines, 2);
        assert_eq!(count("a\nb\n").lines, 3);
    }

    #[test]
    fn test_words_collapse_whitespace_runs() {
        let c = count("  one \t two\n\nthree  ");
        assert_eq!(c.words, 3);
        assert_eq!(c.whitespace, 9);
    }

    #[test]
    fn test_whitespace_follows_ecmascript() {
        // NEL is Unicode whitespace but not ECMAScript whitespace
        let nel = count("a\u{85}b");
        assert_eq!(nel.whitespace, 0);
        assert_eq!(nel.words, 1);

        let bom = count("a\u{FEFF}b\u{3000}c");
        assert_eq!(bom.whitespace, 2);
        assert_eq!(bom.words, 3);
    }

    #[test]
    fn test_non_latin_and_digits() {
        let c = count("Привет 世界 123");
        assert_eq!(c.non_latin, 8);
        assert_eq!(c.latin, 0);
        assert_eq!(c.digit, 3);
        assert_eq!(c.total, 13);
    }

    #[test]
    fn test_emoji_counts_per_code_point() {
        // thumbs up + skin tone modifier
        let c = count("👍🏽");
        assert_eq!(c.total, 2);
        assert_eq!(c.symbols, 2);

        // man ZWJ woman ZWJ girl; the joiners are not symbols
        let family = count("👨\u{200D}👩\u{200D}👧");
        assert_eq!(family.total, 5);
        assert_eq!(family.symbols, 3);
    }

    #[test]
    fn test_categories_are_disjoint() {
        let text = "\u{dc}n\u{ef}c\u{f6}d\u{e9} \u{391}\u{392}\u{393} 42 !? \u{1F600}\tend";
        let c = count(text);
        let categorized = c.whitespace + c.latin + c.non_latin + c.digit + c.symbols;
        assert_eq!(categorized, c.total);
    }
}
