// src/normalize/mod.rs
//! Raw row-group strings → a finished `Entry`.

pub mod dates;
pub mod tags;
pub mod year;

pub use dates::{format_iso, parse_iso, standardize_date};
pub use tags::{parse_extra_tags, parse_season_year, ExtraTags};
pub use year::{compute_effective_year, rebase_year};

use crate::entry::{Entry, RawEntry};

/// Derive every normalized field of one entry.
///
/// The effective year is only computed when the season, the year and a
/// successfully parsed decision date are all present; the decision date is
/// then moved into that year.
pub fn normalize(raw: RawEntry) -> Entry {
    let extra = parse_extra_tags(&raw.tags);
    let (season, year) = match parse_season_year(&raw.tags) {
        Some((season, year)) => (Some(season), Some(year)),
        None => (None, None),
    };
    logd!("Season={season:?} Year={year:?} {extra:?}");

    let date_posted = standardize_date(&raw.date_posted, None);
    logd!("Date_Posted '{}' => '{}'", raw.date_posted, format_iso(date_posted));

    let season_year: Option<i32> = year.as_deref().and_then(|y| y.parse().ok());
    let mut decision_date = if raw.decision_date.is_empty() {
        None
    } else {
        standardize_date(&raw.decision_date, season_year)
    };
    logd!("DecisionDate '{}' => '{}'", raw.decision_date, format_iso(decision_date));

    let mut effective_year = None;
    match (season, year.as_deref(), decision_date) {
        (Some(season), Some(year), Some(date)) => {
            effective_year = compute_effective_year(season, year, &format_iso(Some(date)));
            match effective_year {
                Some(ey) => {
                    let moved = rebase_year(date, ey);
                    logd!("Effective year {ey}; DecisionDate {date} -> {moved}");
                    decision_date = Some(moved);
                }
                None => loge!("Could not compute effective year from '{year}' and {date}"),
            }
        }
        _ => logd!(
            "No effective year: Season={season:?} Year={year:?} DecisionDate='{}'",
            format_iso(decision_date)
        ),
    }

    Entry {
        school: raw.school,
        program: raw.program,
        degree_type: raw.degree_type,
        date_posted,
        decision: raw.decision,
        decision_date,
        season,
        year,
        effective_year,
        gre_total: extra.gre_total,
        gre_v: extra.gre_v,
        gre_aw: extra.gre_aw,
        gpa: extra.gpa,
        nationality: extra.nationality,
        tags: raw.tags,
        comment: raw.comment,
    }
}
