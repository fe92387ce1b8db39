// src/table.rs
//! The output table: entries in scrape order, one fixed column layout.

use std::io::{self, Write};
use std::path::Path;

use crate::config::options::ExportFormat;
use crate::entry::Entry;
use crate::error::Result;
use crate::file;
use crate::normalize::format_iso;

pub const HEADERS: [&str; 16] = [
    "School",
    "Program",
    "Degree_Type",
    "Date_Posted",
    "Decision",
    "DecisionDate",
    "Season",
    "Year",
    "effective_year",
    "GRE_Total",
    "GRE_V",
    "GRE_AW",
    "GPA",
    "Nationality",
    "Tags",
    "Comment",
];

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Append-only; entries are never edited once pushed.
#[derive(Clone, Debug, Default)]
pub struct ResultsTable {
    entries: Vec<Entry>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.entries.iter().map(entry_row)
    }

    pub fn write_to<W: Write>(&self, w: W, format: ExportFormat) -> Result<()> {
        file::write_rows(w, &headers(), self.rows(), format)
    }

    /// Replace whatever is at `path` with this table.
    pub fn write_to_path(&self, path: &Path, format: ExportFormat) -> Result<()> {
        file::write_table_to_path(path, &headers(), self.rows(), format)
    }

    /// Tab-separated glance at the first `n` rows.
    pub fn preview<W: Write>(&self, mut w: W, n: usize) -> io::Result<()> {
        writeln!(w, "{}", HEADERS.join("\t"))?;
        for row in self.rows().take(n) {
            writeln!(w, "{}", row.join("\t"))?;
        }
        writeln!(w, "Total rows: {}", self.len())
    }
}

impl Extend<Entry> for ResultsTable {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Cells in `HEADERS` order; absent values are empty strings.
pub fn entry_row(e: &Entry) -> Vec<String> {
    fn opt<T: ToString>(v: &Option<T>) -> String {
        v.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    vec![
        e.school.clone(),
        e.program.clone(),
        e.degree_type.clone(),
        format_iso(e.date_posted),
        e.decision.clone(),
        format_iso(e.decision_date),
        opt(&e.season),
        opt(&e.year),
        opt(&e.effective_year),
        opt(&e.gre_total),
        opt(&e.gre_v),
        opt(&e.gre_aw),
        opt(&e.gpa),
        opt(&e.nationality),
        format_tag_list(&e.tags),
        opt(&e.comment),
    ]
}

/// `['Fall 2025', 'GRE 320']`; a tag containing `'` is double-quoted instead.
pub fn format_tag_list(tags: &[String]) -> String {
    let items: Vec<String> = tags
        .iter()
        .map(|t| {
            let quote = if t.contains('\'') && !t.contains('"') { '"' } else { '\'' };
            quote_tag(t, quote)
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Backslash-escape `\\`, control characters and the enclosing quote.
fn quote_tag(tag: &str, quote: char) -> String {
    let mut out = String::with_capacity(tag.len() + 2);
    out.push(quote);
    for ch in tag.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
