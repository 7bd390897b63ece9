//! Date and text normalization.
//!
//! Dates arrive from the backend in three shapes: a plain `YYYY-MM-DD`, an
//! ISO date-time (`2024-03-01T08:30:00`), or some other serialized timestamp.
//! `normalize_date` reduces all of them to a `CanonicalDate`, falling back to
//! `CanonicalDate::Unknown` instead of failing.
//!
//! Search is case- and diacritic-insensitive so that Vietnamese names match
//! their unaccented spelling. `fold_text` must be applied to both the search
//! term and every candidate field.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use clinic_contracts::view::CanonicalDate;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts the backend is known to emit. A naive value is
/// already in local time, so its date is taken as-is.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Offset-carrying layouts that are not RFC 3339 (no `T` separator).
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%z"];

/// Reduce a raw date string to its canonical calendar date.
///
/// Rules, applied in order:
/// 1. Exactly `YYYY-MM-DD` → that date.
/// 2. Contains a `T` → the part before the first `T`, if it is a valid date.
/// 3. Otherwise parse as a full date-time and take its local calendar date.
///
/// Anything else, including impossible calendar dates such as `2024-02-30`,
/// yields `CanonicalDate::Unknown`.
pub fn normalize_date(raw: &str) -> CanonicalDate {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CanonicalDate::Unknown;
    }

    if has_canonical_shape(trimmed) {
        return parse_canonical(trimmed);
    }

    if let Some((head, _)) = trimmed.split_once('T') {
        if has_canonical_shape(head) {
            return parse_canonical(head);
        }
    }

    match parse_date_time(trimmed) {
        Some(date) => CanonicalDate::Known(date),
        None => CanonicalDate::Unknown,
    }
}

/// Normalize an optional raw date. A missing field is an unknown date.
pub fn normalize_opt_date(raw: Option<&str>) -> CanonicalDate {
    raw.map(normalize_date).unwrap_or(CanonicalDate::Unknown)
}

/// Fold text for search comparison.
///
/// Lower-cases, decomposes to NFD, drops combining marks, and trims. Case
/// folding goes first because some lowercase forms carry their own marks
/// (`İ` lowercases to `i` + U+0307). The Vietnamese `đ`/`Đ` has no
/// decomposition, so it is mapped to `d` explicitly.
///
/// ```rust,ignore
/// assert_eq!(fold_text("  Bác Sĩ "), "bac si");
/// ```
pub fn fold_text(raw: &str) -> String {
    let folded: String = raw
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            other => other,
        })
        .collect();
    folded.trim().to_string()
}

fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_canonical(s: &str) -> CanonicalDate {
    match NaiveDate::parse_from_str(s, CANONICAL_FORMAT) {
        Ok(date) => CanonicalDate::Known(date),
        Err(_) => CanonicalDate::Unknown,
    }
}

fn parse_date_time(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    for fmt in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
    }

    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(date);
    }

    parse_epoch(s)
}

/// Epoch timestamps: 13 digits are milliseconds, 10 digits are seconds.
fn parse_epoch(s: &str) -> Option<NaiveDate> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    let utc = match s.len() {
        13 => DateTime::from_timestamp_millis(value)?,
        10 => DateTime::from_timestamp(value, 0)?,
        _ => return None,
    };
    Some(utc.with_timezone(&Local).date_naive())
}
