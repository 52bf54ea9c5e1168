//! Date parameters of Content-Disposition (RFC 2183 §2.4, RFC 2822 §3.3).

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use crate::error::{FieldError, Result};

/// Parse a `creation-date` / `modification-date` / `read-date` value.
///
/// Accepts RFC 2822 date-times, including trailing `(comment)` zone names and
/// North American zone abbreviations. RFC 3339 timestamps and zone-less values
/// (read as UTC) are tolerated; `mail-parser` gets the last word.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    try_parse(trimmed).ok_or_else(|| {
        debug!(date = trimmed, "Could not parse date");
        FieldError::InvalidDate {
            value: trimmed.to_string(),
        }
    })
}

fn try_parse(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    let cleaned = strip_trailing_comment(value);
    // Numeric form first: chrono reads unknown zone names as -0000
    let candidates = [with_numeric_zone(cleaned), cleaned.to_string()];

    candidates
        .iter()
        .find_map(|c| DateTime::parse_from_rfc2822(c).ok())
        .or_else(|| DateTime::parse_from_rfc3339(cleaned).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| without_zone(cleaned))
        .or_else(|| mail_parser_date(value))
}

/// `"Tue, 1 Jul 2003 10:52:37 +0200 (CEST)"` → `"Tue, 1 Jul 2003 10:52:37 +0200"`.
fn strip_trailing_comment(value: &str) -> &str {
    match value.strip_suffix(')').and_then(|v| v.rfind('(')) {
        Some(open) => value[..open].trim_end(),
        None => value,
    }
}

/// Swap a zone abbreviation chrono does not know for its offset.
fn with_numeric_zone(value: &str) -> String {
    const ZONES: [(&str, &str); 6] = [
        ("UTC", "+0000"),
        ("CEST", "+0200"),
        ("CET", "+0100"),
        ("BST", "+0100"),
        ("IST", "+0530"),
        ("JST", "+0900"),
    ];
    match value.rsplit_once(' ') {
        Some((head, zone)) => ZONES
            .iter()
            .find(|(name, _)| zone.eq_ignore_ascii_case(name))
            .map(|(_, offset)| format!("{head} {offset}"))
            .unwrap_or_else(|| value.to_string()),
        None => value.to_string(),
    }
}

/// Values with no zone at all, taken as UTC.
fn without_zone(value: &str) -> Option<DateTime<Utc>> {
    let body = value
        .split_once(", ")
        .map(|(_, rest)| rest)
        .unwrap_or(value);
    ["%d %b %Y %H:%M:%S", "%d %b %Y %H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
        .map(|ndt| ndt.and_utc())
}

fn mail_parser_date(value: &str) -> Option<DateTime<Utc>> {
    use mail_parser::MessageParser;

    // mail-parser only parses whole messages
    let message = format!("Date: {value}\n\n");
    let parsed = MessageParser::default().parse(message.as_bytes())?;
    let rfc3339 = parsed.date()?.to_rfc3339();
    DateTime::parse_from_rfc3339(&rfc3339)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
