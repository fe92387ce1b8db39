// src/normalize/year.rs
//! Effective admissions year.
//!
//! A Fall 2025 decision posted in December 2024 belongs to the cycle that
//! started in 2024; same for a Spring 2025 decision posted June–October 2024.

use chrono::{Datelike, NaiveDate};

use crate::entry::Season;
use super::dates::parse_iso;

/// How many years to step back for a decision in `month` (1-12).
fn rollback(season: Season, month: u32) -> i32 {
    match season {
        Season::Fall if (11..=12).contains(&month) => 1,
        Season::Spring if (6..=10).contains(&month) => 1,
        _ => 0,
    }
}

pub fn effective_year(season: Season, season_year: i32, decision: NaiveDate) -> i32 {
    season_year - rollback(season, decision.month())
}

/// String-level form: `None` when the year or the ISO date doesn't parse.
pub fn compute_effective_year(season: Season, year: &str, decision_iso: &str) -> Option<i32> {
    let decision = parse_iso(decision_iso)?;
    let season_year: i32 = year.trim().parse().ok()?;
    Some(effective_year(season, season_year, decision))
}

/// Move `date` into `year`. Feb 29 lands on Feb 28 when `year` has no leap day.
pub fn rebase_year(date: NaiveDate, year: i32) -> NaiveDate {
    if let Some(d) = date.with_year(year) {
        return d;
    }
    if date.month() == 2 && date.day() == 29 {
        if let Some(d) = NaiveDate::from_ymd_opt(year, 2, 28) {
            logd!("Rebased {date} to {d} (no leap day in {year})");
            return d;
        }
    }
    loge!("Moving {date} into year {year} gives an invalid date; keeping {date}");
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fall_rolls_back_in_nov_dec() {
        assert_eq!(compute_effective_year(Season::Fall, "2025", "2025-12-15"), Some(2024));
        assert_eq!(compute_effective_year(Season::Fall, "2025", "2025-11-01"), Some(2024));
        assert_eq!(compute_effective_year(Season::Fall, "2025", "2025-10-01"), Some(2025));
        assert_eq!(compute_effective_year(Season::Fall, "2025", "2025-03-20"), Some(2025));
    }

    #[test]
    fn spring_rolls_back_jun_to_oct() {
        assert_eq!(compute_effective_year(Season::Spring, "2025", "2024-07-01"), Some(2024));
        assert_eq!(compute_effective_year(Season::Spring, "2025", "2024-06-01"), Some(2024));
        assert_eq!(compute_effective_year(Season::Spring, "2025", "2024-10-31"), Some(2024));
        assert_eq!(compute_effective_year(Season::Spring, "2025", "2024-11-02"), Some(2025));
        assert_eq!(compute_effective_year(Season::Spring, "2025", "2025-05-31"), Some(2025));
    }

    #[test]
    fn unparseable_inputs_give_none() {
        assert_eq!(compute_effective_year(Season::Fall, "20x5", "2025-12-15"), None);
        assert_eq!(compute_effective_year(Season::Fall, "2025", "Dec 15"), None);
        assert_eq!(compute_effective_year(Season::Fall, "", "2025-12-15"), None);
    }

    #[test]
    fn rebase_moves_year() {
        assert_eq!(rebase_year(ymd(2025, 12, 15), 2024), ymd(2024, 12, 15));
    }

    #[test]
    fn rebase_leap_day_falls_back_to_28th() {
        assert_eq!(rebase_year(ymd(2024, 2, 29), 2023), ymd(2023, 2, 28));
        assert_eq!(rebase_year(ymd(2024, 2, 29), 2028), ymd(2028, 2, 29));
    }
}
