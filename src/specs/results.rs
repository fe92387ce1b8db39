// src/specs/results.rs
//! Scraping *spec* for the survey results listing.
//!
//! The listing is one table. Each entry is a primary row with four cells
//! (school, program + degree, date posted, decision), optionally followed by
//! up to two rows marked `tw-border-none`: first the tag badges, then the
//! applicant's comment.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    BODY_ROWS_SEL, COMMENT_SEL, CONTINUATION_CLASS, RESULTS_TABLE_SEL, SCHOOL_SEL, TAG_SEL,
};
use crate::core::html::{first_text, has_class, selector, strip_text};
use crate::core::sanitize::split_decision;
use crate::entry::RawEntry;
use crate::error::Result;

/// Primary rows need at least this many cells.
const PRIMARY_CELLS: usize = 4;

struct Selectors {
    table: Selector,
    rows: Selector,
    td: Selector,
    div: Selector,
    span: Selector,
    school: Selector,
    tag: Selector,
    comment: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            table: selector(RESULTS_TABLE_SEL)?,
            rows: selector(BODY_ROWS_SEL)?,
            td: selector("td")?,
            div: selector("div")?,
            span: selector("span")?,
            school: selector(SCHOOL_SEL)?,
            tag: selector(TAG_SEL)?,
            comment: selector(COMMENT_SEL)?,
        })
    }
}

/// Every entry on one listing page, in page order.
/// A page without the results table yields no entries.
pub fn parse_doc(html_doc: &str) -> Result<Vec<RawEntry>> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(html_doc);

    let Some(table) = doc.select(&sel.table).next() else {
        logw!("Results table not found; possibly no entries on this page");
        return Ok(Vec::new());
    };

    let rows: Vec<ElementRef<'_>> = table.select(&sel.rows).collect();
    let is_continuation = |j: usize| rows.get(j).is_some_and(|r| has_class(*r, CONTINUATION_CLASS));

    let mut out = Vec::new();
    let mut i = 0usize;
    while i < rows.len() {
        let tds: Vec<ElementRef<'_>> = rows[i].select(&sel.td).collect();
        if tds.len() < PRIMARY_CELLS {
            logd!("Row {i}: {} cells, skipping", tds.len());
            i += 1;
            continue;
        }

        let mut entry = read_primary(&tds, &sel);

        // Row-group: primary [+ tags [+ comment]]
        let tag_row = is_continuation(i + 1).then(|| rows[i + 1]);
        let comment_row = (tag_row.is_some() && is_continuation(i + 2)).then(|| rows[i + 2]);
        i += 1 + usize::from(tag_row.is_some()) + usize::from(comment_row.is_some());

        if let Some(row) = tag_row {
            entry.tags = read_tags(row, &sel);
        }
        if let Some(row) = comment_row {
            entry.comment = read_comment(row, &sel);
        }
        logd!("{} / {} / {:?}: tags={:?}", entry.school, entry.program, entry.decision, entry.tags);

        out.push(entry);
    }

    Ok(out)
}

/* ---------------- helpers ---------------- */

fn read_primary(tds: &[ElementRef<'_>], sel: &Selectors) -> RawEntry {
    let school = first_text(tds[0], &sel.school).unwrap_or_default();

    // <span>Education Policy</span><svg/><span>PhD</span>
    let spans: Vec<ElementRef<'_>> = tds[1].select(&sel.span).collect();
    let (program, degree_type) = if spans.len() >= 2 {
        (strip_text(spans[0]), strip_text(spans[1]))
    } else {
        (strip_text(tds[1]), s!())
    };

    let date_posted = strip_text(tds[2]);

    // "Accepted on 24 Dec"
    let decision_text = first_text(tds[3], &sel.div).unwrap_or_default();
    let (decision, decision_date) = split_decision(&decision_text);

    RawEntry {
        school,
        program,
        degree_type,
        date_posted,
        decision,
        decision_date,
        tags: Vec::new(),
        comment: None,
    }
}

fn read_tags(row: ElementRef<'_>, sel: &Selectors) -> Vec<String> {
    row.select(&sel.td)
        .next()
        .map(|td| td.select(&sel.tag).map(strip_text).collect())
        .unwrap_or_default()
}

fn read_comment(row: ElementRef<'_>, sel: &Selectors) -> Option<String> {
    row.select(&sel.td)
        .next()
        .and_then(|td| first_text(td, &sel.comment))
}
