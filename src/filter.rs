// src/filter.rs
//! Offline filter over a previously exported results table.
//!
//! Load → canonicalize the two date columns → keep rows matching a fixed
//! conjunctive predicate → print the head → save the subset.

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::config::options::FilterOptions;
use crate::error::{Error, Result};
use crate::file::{self, DataSet};
use crate::normalize::{format_iso, parse_iso};

/// Marker for a date cell that didn't parse.
pub const MISSING: &str = "NaT";

pub const DATE_COLUMNS: [&str; 2] = ["Date_Posted", "DecisionDate"];
pub const SCHOOL_COL: &str = "School";
pub const DEGREE_COL: &str = "Degree_Type";

impl DataSet {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| Error::MissingColumn(s!(name)))
    }
}

/// `December 25, 2024` (comma optional) or an already-ISO `2024-12-25`.
pub fn parse_listing_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%B %d %Y"))
        .ok()
        .or_else(|| parse_iso(s))
}

/// Rewrite every cell of `column` to ISO, or to [`MISSING`] when it doesn't parse.
pub fn canonicalize_dates(ds: &mut DataSet, column: &str) -> Result<()> {
    let ix = ds.require_column(column)?;
    let mut missing = 0usize;
    for row in &mut ds.rows {
        if let Some(cell) = row.get_mut(ix) {
            match parse_listing_date(cell) {
                Some(d) => *cell = format_iso(Some(d)),
                None => {
                    *cell = s!(MISSING);
                    missing += 1;
                }
            }
        }
    }
    logd!("{column}: {missing} unparseable date(s)");
    Ok(())
}

/// `Degree_Type == degree_type && School == school`, exact match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub degree_type: String,
    pub school: String,
}

impl Predicate {
    pub fn from_options(opts: &FilterOptions) -> Self {
        Self { degree_type: opts.degree_type.clone(), school: opts.school.clone() }
    }

    /// Keep the rows that match, in order.
    pub fn apply(&self, ds: &DataSet) -> Result<DataSet> {
        let degree_ix = ds.require_column(DEGREE_COL)?;
        let school_ix = ds.require_column(SCHOOL_COL)?;
        fn cell(row: &[String], ix: usize) -> &str {
            row.get(ix).map(String::as_str).unwrap_or("")
        }

        let rows = ds
            .rows
            .iter()
            .filter(|r| cell(r, degree_ix) == self.degree_type && cell(r, school_ix) == self.school)
            .cloned()
            .collect();
        Ok(DataSet { headers: ds.headers.clone(), rows })
    }
}

/// Print the header and the first `n` rows, tab-separated.
pub fn print_head<W: Write>(mut w: W, ds: &DataSet, n: usize) -> io::Result<()> {
    writeln!(w, "{}", ds.headers.join("\t"))?;
    for row in ds.rows.iter().take(n) {
        writeln!(w, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Full filter run. Returns the filtered table (also written to `opts.out_path`).
pub fn run<W: Write>(opts: &FilterOptions, out: W) -> Result<DataSet> {
    let mut ds = file::read_table(&opts.in_path, opts.format)?;
    logf!("Loaded {} rows from {}", ds.rows.len(), opts.in_path.display());

    for column in DATE_COLUMNS {
        canonicalize_dates(&mut ds, column)?;
    }

    let filtered = Predicate::from_options(opts).apply(&ds)?;
    print_head(out, &filtered, opts.head_rows)?;
    save(&filtered, &opts.out_path, opts)?;
    Ok(filtered)
}

fn save(ds: &DataSet, path: &Path, opts: &FilterOptions) -> Result<()> {
    file::write_table_to_path(path, &ds.headers, ds.rows.iter().cloned(), opts.format)?;
    logf!("Kept {} rows; saved {}", ds.rows.len(), path.display());
    Ok(())
}
