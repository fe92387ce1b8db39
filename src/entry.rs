// src/entry.rs
//! Admissions-result records.
//!
//! `RawEntry` is what the extractor reads off one row-group: plain strings,
//! nothing interpreted. `Entry` is the normalized record that goes into the
//! output table. Every derived field is an `Option`; a value the page didn't
//! carry (or that didn't parse) is simply absent and exports as an empty cell.

use std::fmt;

use chrono::NaiveDate;

/// Application season named in a tag like `Fall 2025`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
        }
    }

    /// Case-insensitive; anything but fall/spring is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("fall") {
            Some(Season::Fall)
        } else if s.eq_ignore_ascii_case("spring") {
            Some(Season::Spring)
        } else {
            None
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nationality {
    American,
    International,
}

impl Nationality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nationality::American => "American",
            Nationality::International => "International",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row-group as found on the page, before any interpretation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub school: String,
    pub program: String,
    pub degree_type: String,
    pub date_posted: String,
    pub decision: String,
    pub decision_date: String,
    pub tags: Vec<String>,
    pub comment: Option<String>,
}

/// A normalized admissions result. Built once by `normalize::normalize`,
/// never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub school: String,
    pub program: String,
    pub degree_type: String,
    pub date_posted: Option<NaiveDate>,
    pub decision: String,
    /// Rebased onto the effective year when one was computed.
    pub decision_date: Option<NaiveDate>,
    pub season: Option<Season>,
    pub year: Option<String>,
    pub effective_year: Option<i32>,
    pub gre_total: Option<String>,
    pub gre_v: Option<String>,
    pub gre_aw: Option<String>,
    pub gpa: Option<String>,
    pub nationality: Option<Nationality>,
    pub tags: Vec<String>,
    pub comment: Option<String>,
}
