//! Tolerant parsing of scraper timestamps.
//!
//! The scraper writes `captured_at` in at least three shapes: full RFC 3339
//! with `Z`, RFC 3339 with a numeric offset, and a bare MySQL DATETIME
//! (`YYYY-MM-DD HH:MM:SS`) that is UTC by convention.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a `captured_at` string into a UTC instant. Returns `None` for
/// anything unparseable; callers keep the reading but exclude it from
/// time arithmetic.
pub fn parse_captured_at(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let s = s.replacen(' ', "T", 1);

    if has_explicit_offset(&s) {
        return DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }

    // No zone marker: interpret the wall clock as UTC.
    s.parse::<NaiveDateTime>().ok().map(|dt| dt.and_utc())
}

/// Trailing `Z` or a `+HH:MM` / `-HH:MM` offset.
fn has_explicit_offset(s: &str) -> bool {
    if s.ends_with('Z') || s.ends_with('z') {
        return true;
    }
    let bytes = s.as_bytes();
    bytes.len() >= 6
        && matches!(bytes[bytes.len() - 6], b'+' | b'-')
        && bytes[bytes.len() - 3] == b':'
}
