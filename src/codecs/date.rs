//! Date/time conversion between seven textual formats.
//!
//! [`DATE_FORMATS`] is ordered from the loosest format to the strictest. Detection
//! picks the last format whose matcher accepts the input, so a strict format listed
//! late overrides the permissive JavaScript parser listed first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::errors::UnknownNameError;

/// Identifies one of the supported date formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateFormatKey {
    /// `Date.prototype.toString()` style
    JavaScript,
    Iso8601,
    Iso9075,
    Rfc3339,
    Rfc7231,
    TimestampSeconds,
    TimestampMilliseconds,
}

impl DateFormatKey {
    pub const ALL: [DateFormatKey; 7] = [
        DateFormatKey::JavaScript,
        DateFormatKey::Iso8601,
        DateFormatKey::Iso9075,
        DateFormatKey::Rfc3339,
        DateFormatKey::Rfc7231,
        DateFormatKey::TimestampSeconds,
        DateFormatKey::TimestampMilliseconds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormatKey::JavaScript => "JS",
            DateFormatKey::Iso8601 => "ISO8601",
            DateFormatKey::Iso9075 => "ISO9075",
            DateFormatKey::Rfc3339 => "RFC3339",
            DateFormatKey::Rfc7231 => "RFC7231",
            DateFormatKey::TimestampSeconds => "TimestampSeconds",
            DateFormatKey::TimestampMilliseconds => "TimestampMilliseconds",
        }
    }

    /// The format record for this key.
    pub fn format(&self) -> &'static DateFormat {
        &DATE_FORMATS[*self as usize]
    }
}

impl fmt::Display for DateFormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormatKey {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "js" | "javascript" => Ok(DateFormatKey::JavaScript),
            "iso8601" | "iso" => Ok(DateFormatKey::Iso8601),
            "iso9075" | "sql" => Ok(DateFormatKey::Iso9075),
            "rfc3339" => Ok(DateFormatKey::Rfc3339),
            "rfc7231" | "http" => Ok(DateFormatKey::Rfc7231),
            "timestampseconds" | "timestamp" | "unix" | "seconds" => {
                Ok(DateFormatKey::TimestampSeconds)
            }
            "timestampmilliseconds" | "millis" | "milliseconds" => {
                Ok(DateFormatKey::TimestampMilliseconds)
            }
            _ => Err(UnknownNameError::with_candidates(
                "date format",
                s,
                &DateFormatKey::ALL.map(|k| k.as_str()),
            )),
        }
    }
}

/// Render, parse and recognise one date format.
pub struct DateFormat {
    pub key: DateFormatKey,
    /// Render `date` as wall-clock time in `tz` (UTC when `None`).
    pub stringify: fn(&DateTime<Utc>, Option<Tz>) -> String,
    pub parse: fn(&str) -> Option<DateTime<Utc>>,
    pub matches: fn(&str) -> bool,
}

impl fmt::Debug for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateFormat").field("key", &self.key).finish()
    }
}

/// Indexed by `DateFormatKey as usize`.
pub static DATE_FORMATS: [DateFormat; 7] = [
    DateFormat {
        key: DateFormatKey::JavaScript,
        stringify: stringify_js,
        parse: parse_loose,
        matches: matches_js,
    },
    DateFormat {
        key: DateFormatKey::Iso8601,
        stringify: stringify_iso8601,
        parse: parse_iso8601,
        matches: matches_iso8601,
    },
    DateFormat {
        key: DateFormatKey::Iso9075,
        stringify: stringify_iso9075,
        parse: parse_iso9075,
        matches: matches_iso9075,
    },
    DateFormat {
        key: DateFormatKey::Rfc3339,
        stringify: stringify_rfc3339,
        parse: parse_rfc3339,
        matches: matches_rfc3339,
    },
    DateFormat {
        key: DateFormatKey::Rfc7231,
        stringify: stringify_rfc7231,
        parse: parse_rfc7231,
        matches: matches_rfc7231,
    },
    DateFormat {
        key: DateFormatKey::TimestampSeconds,
        stringify: stringify_seconds,
        parse: parse_seconds,
        matches: matches_seconds,
    },
    DateFormat {
        key: DateFormatKey::TimestampMilliseconds,
        stringify: stringify_millis,
        parse: parse_millis,
        matches: matches_millis,
    },
];

// ============================================================================
// Matchers
// ============================================================================

static ISO8601: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:\d{2})?)?$")
        .unwrap()
});

static ISO9075: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap());

static RFC3339: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+(?:Z|[+-]\d{2}:\d{2})$").unwrap()
});

static RFC7231: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), \d{2} (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) \d{4} \d{2}:\d{2}:\d{2} GMT$",
    )
    .unwrap()
});

// 11 digits stays in seconds; milliseconds start at 12
static SECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,11}$").unwrap());
static MILLISECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{12,14}$").unwrap());

fn matches_js(text: &str) -> bool {
    parse_loose(text).is_some()
}

fn matches_iso8601(text: &str) -> bool {
    ISO8601.is_match(text)
}

fn matches_iso9075(text: &str) -> bool {
    ISO9075.is_match(text)
}

fn matches_rfc3339(text: &str) -> bool {
    RFC3339.is_match(text)
}

fn matches_rfc7231(text: &str) -> bool {
    RFC7231.is_match(text)
}

fn matches_seconds(text: &str) -> bool {
    SECONDS.is_match(text)
}

fn matches_millis(text: &str) -> bool {
    MILLISECONDS.is_match(text)
}

// ============================================================================
// Stringify
// ============================================================================

fn in_zone(date: &DateTime<Utc>, tz: Option<Tz>) -> DateTime<Tz> {
    date.with_timezone(&tz.unwrap_or(chrono_tz::UTC))
}

/// `Z` for a zero offset, `+hh:mm` otherwise.
fn offset_suffix(local: &DateTime<Tz>) -> String {
    if local.offset().fix().local_minus_utc() == 0 {
        "Z".to_string()
    } else {
        local.format("%:z").to_string()
    }
}

fn stringify_js(date: &DateTime<Utc>, tz: Option<Tz>) -> String {
    in_zone(date, tz)
        .format("%a %b %d %Y %H:%M:%S GMT%z (%Z)")
        .to_string()
}

fn stringify_iso8601(date: &DateTime<Utc>, tz: Option<Tz>) -> String {
    let local = in_zone(date, tz);
    format!("{}{}", local.format("%Y-%m-%dT%H:%M:%S"), offset_suffix(&local))
}

fn stringify_iso9075(date: &DateTime<Utc>, tz: Option<Tz>) -> String {
    in_zone(date, tz).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn stringify_rfc3339(date: &DateTime<Utc>, tz: Option<Tz>) -> String {
    let local = in_zone(date, tz);
    format!(
        "{}{}",
        local.format("%Y-%m-%dT%H:%M:%S%.3f"),
        offset_suffix(&local)
    )
}

fn stringify_rfc7231(date: &DateTime<Utc>, _tz: Option<Tz>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn stringify_seconds(date: &DateTime<Utc>, _tz: Option<Tz>) -> String {
    date.timestamp().to_string()
}

fn stringify_millis(date: &DateTime<Utc>, _tz: Option<Tz>) -> String {
    date.timestamp_millis().to_string()
}

// ============================================================================
// Parse
// ============================================================================

fn parse_iso8601(text: &str) -> Option<DateTime<Utc>> {
    if !ISO8601.is_match(text) {
        return None;
    }

    let normalized = match text.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => text.to_string(),
    };

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, pattern) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_iso9075(text: &str) -> Option<DateTime<Utc>> {
    if !ISO9075.is_match(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_rfc3339(text: &str) -> Option<DateTime<Utc>> {
    if !RFC3339.is_match(text) {
        return None;
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_rfc7231(text: &str) -> Option<DateTime<Utc>> {
    if !RFC7231.is_match(text) {
        return None;
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_seconds(text: &str) -> Option<DateTime<Utc>> {
    if !SECONDS.is_match(text) {
        return None;
    }
    DateTime::from_timestamp(text.parse().ok()?, 0)
}

fn parse_millis(text: &str) -> Option<DateTime<Utc>> {
    if !MILLISECONDS.is_match(text) {
        return None;
    }
    DateTime::from_timestamp_millis(text.parse().ok()?)
}

const LOOSE_DATE_TIMES: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%b %d %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const LOOSE_DATES: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Accept what a browser's `new Date(string)` would reasonably accept.
///
/// Bare numbers are rejected so that timestamps are left to their own formats.
/// Inputs without an offset are read as UTC.
fn parse_loose(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() || text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_iso8601(text) {
        return Some(dt);
    }

    // "Mon Jan 15 2024 11:30:00 GMT+0100 (Central European Standard Time)"
    let without_zone_name = match text.find(" (") {
        Some(idx) => &text[..idx],
        None => text,
    };
    if let Ok(dt) = DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z") {
        return Some(dt.with_timezone(&Utc));
    }

    for pattern in LOOSE_DATE_TIMES {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc());
        }
    }
    for pattern in LOOSE_DATES {
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

// ============================================================================
// Public helpers
// ============================================================================

/// Resolve an IANA zone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Like [`parse_timezone`], with a "did you mean" suggestion on failure.
pub fn resolve_timezone(name: &str) -> Result<Tz, UnknownNameError> {
    parse_timezone(name).ok_or_else(|| {
        let candidates: Vec<&str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
        UnknownNameError::with_candidates("timezone", name, &candidates)
    })
}

/// The last format whose matcher accepts `text`.
pub fn detect_date_format(text: &str) -> Option<DateFormatKey> {
    let text = text.trim();
    let found = DATE_FORMATS
        .iter()
        .rposition(|f| (f.matches)(text))
        .map(|i| DATE_FORMATS[i].key);
    log::debug!("date detection: {:?}", found);
    found
}

/// Parse `text` in `key`'s format, or in the detected format when `key` is `None`.
pub fn parse_date(text: &str, key: Option<DateFormatKey>) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let key = key.or_else(|| detect_date_format(text))?;
    (key.format().parse)(text)
}

/// Render `date` in every format, in table order.
pub fn convert_all(date: &DateTime<Utc>, tz: Option<Tz>) -> Vec<(DateFormatKey, String)> {
    DATE_FORMATS
        .iter()
        .map(|f| (f.key, (f.stringify)(date, tz)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn paris() -> Option<Tz> {
        parse_timezone("Europe/Paris")
    }

    #[test]
    fn test_table_is_indexed_by_key() {
        for key in DateFormatKey::ALL {
            assert_eq!(key.format().key, key);
        }
    }

    #[test]
    fn test_timestamp_match_bounds() {
        let seconds = DateFormatKey::TimestampSeconds.format();
        let millis = DateFormatKey::TimestampMilliseconds.format();
        assert!((seconds.matches)("9999999999"));
        assert!((seconds.matches)("99999999999"));
        assert!(!(seconds.matches)("123456789012"));
        assert!((millis.matches)("123456789012"));
        assert!(!(millis.matches)("99999999999"));
        assert!(!(millis.matches)("123456789012345"));
        assert!(!(seconds.matches)("-1"));
        assert!(!(seconds.matches)(""));
    }

    #[test]
    fn test_stringify_utc() {
        let date = sample();
        let rendered: Vec<String> = convert_all(&date, None)
            .into_iter()
            .map(|(_, s)| s)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Mon Jan 15 2024 10:30:00 GMT+0000 (UTC)",
                "2024-01-15T10:30:00Z",
                "2024-01-15 10:30:00",
                "2024-01-15T10:30:00.000Z",
                "Mon, 15 Jan 2024 10:30:00 GMT",
                "1705314600",
                "1705314600000",
            ]
        );
    }

    #[test]
    fn test_stringify_in_zone() {
        let date = sample();
        let tz = paris();
        assert_eq!(
            (DateFormatKey::Iso8601.format().stringify)(&date, tz),
            "2024-01-15T11:30:00+01:00"
        );
        assert_eq!(
            (DateFormatKey::Iso9075.format().stringify)(&date, tz),
            "2024-01-15 11:30:00"
        );
        assert_eq!(
            (DateFormatKey::Rfc3339.format().stringify)(&date, tz),
            "2024-01-15T11:30:00.000+01:00"
        );
        assert_eq!(
            (DateFormatKey::JavaScript.format().stringify)(&date, tz),
            "Mon Jan 15 2024 11:30:00 GMT+0100 (CET)"
        );
    }

    #[test]
    fn test_rfc7231_is_always_gmt() {
        let date = sample();
        let f = DateFormatKey::Rfc7231.format();
        assert_eq!(
            (f.stringify)(&date, parse_timezone("Asia/Tokyo")),
            "Mon, 15 Jan 2024 10:30:00 GMT"
        );
        assert_eq!((f.stringify)(&date, paris()), (f.stringify)(&date, None));
    }

    #[test]
    fn test_detect_picks_last_match() {
        // JS accepts all of these too, but the stricter format listed later wins
        assert_eq!(
            detect_date_format("2024-01-15T10:30:00.000Z"),
            Some(DateFormatKey::Rfc3339)
        );
        assert_eq!(
            detect_date_format("2024-01-15T10:30:00Z"),
            Some(DateFormatKey::Iso8601)
        );
        assert_eq!(
            detect_date_format("2024-01-15 10:30:00"),
            Some(DateFormatKey::Iso9075)
        );
        assert_eq!(
            detect_date_format("Mon, 15 Jan 2024 10:30:00 GMT"),
            Some(DateFormatKey::Rfc7231)
        );
        assert_eq!(
            detect_date_format("Mon Jan 15 2024 11:30:00 GMT+0100 (CET)"),
            Some(DateFormatKey::JavaScript)
        );
        assert_eq!(
            detect_date_format("1705314600"),
            Some(DateFormatKey::TimestampSeconds)
        );
        assert_eq!(
            detect_date_format("1705314600000"),
            Some(DateFormatKey::TimestampMilliseconds)
        );
        assert_eq!(detect_date_format("not a date"), None);
    }

    #[test]
    fn test_parse_each_format() {
        let expected = sample();
        for (key, rendered) in convert_all(&expected, None) {
            assert_eq!(parse_date(&rendered, Some(key)), Some(expected), "{key}");
            assert_eq!(parse_date(&rendered, None), Some(expected), "{key}");
        }
    }

    #[test]
    fn test_offsetless_input_is_utc() {
        assert_eq!(parse_date("2024-01-15 10:30:00", None), Some(sample()));
        assert_eq!(parse_date("2024-01-15T10:30", None), Some(sample()));
        assert_eq!(
            parse_date("2024-01-15", None),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_loose_parser() {
        assert_eq!(
            parse_date("Jan 15 2024", Some(DateFormatKey::JavaScript)),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_date("12345", Some(DateFormatKey::JavaScript)), None);
    }

    #[test]
    fn test_timezones() {
        assert!(parse_timezone("Europe/Paris").is_some());
        assert!(parse_timezone("Mars/Olympus_Mons").is_none());
        let err = resolve_timezone("Europe/Pariss").unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_date_format_key_from_str() {
        assert_eq!(
            "rfc-3339".parse::<DateFormatKey>().unwrap(),
            DateFormatKey::Rfc3339
        );
        assert_eq!(
            "millis".parse::<DateFormatKey>().unwrap(),
            DateFormatKey::TimestampMilliseconds
        );
        assert!("rfc9999".parse::<DateFormatKey>().is_err());
    }
}
