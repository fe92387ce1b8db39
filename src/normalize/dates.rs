// src/normalize/dates.rs
//! Listing dates ("December 28, 2024", "28 Dec", "Dec 28") to calendar dates.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::core::sanitize::clean_date_text;

/// Year a yearless date parses into before a default is applied.
pub const SENTINEL_YEAR: i32 = 1900;

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Tried in order; `true` when the format carries the year itself.
const FORMATS: [(&str, bool); 8] = [
    ("%B %d %Y", true),
    ("%b %d %Y", true),
    ("%B %d", false),
    ("%b %d", false),
    ("%d %B %Y", true),
    ("%d %b %Y", true),
    ("%d %B", false),
    ("%d %b", false),
];

static LEAP_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b29\s+Feb\b").expect("leap day pattern"));

fn parse_with(text: &str, fmt: &str, has_year: bool) -> Option<NaiveDate> {
    if has_year {
        NaiveDate::parse_from_str(text, fmt).ok()
    } else {
        let text = format!("{text} {SENTINEL_YEAR}");
        let fmt = format!("{fmt} %Y");
        NaiveDate::parse_from_str(&text, &fmt).ok()
    }
}

/// Parse a listing date. `29 Feb` is always read as `28 Feb`.
/// Yearless dates take `default_year` when given, else the sentinel year.
pub fn standardize_date(raw: &str, default_year: Option<i32>) -> Option<NaiveDate> {
    let text = clean_date_text(raw);
    if text.is_empty() {
        return None;
    }
    let text = LEAP_DAY.replace_all(&text, "28 Feb");

    for (fmt, has_year) in FORMATS {
        if let Some(date) = parse_with(&text, fmt, has_year) {
            let date = match default_year {
                Some(year) if date.year() == SENTINEL_YEAR => date.with_year(year).unwrap_or(date),
                _ => date,
            };
            logd!("Parsed '{text}' with '{fmt}' as {date}");
            return Some(date);
        }
    }

    logd!("Failed to parse date '{text}'");
    None
}

/// `YYYY-MM-DD`, or empty for a missing date.
pub fn format_iso(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(ISO_FORMAT).to_string()).unwrap_or_default()
}

pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
}
