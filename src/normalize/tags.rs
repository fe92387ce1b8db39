// src/normalize/tags.rs
//! Scores, GPA, nationality and season/year out of free-text tags.
//!
//! Tags are short badges like `GRE 324`, `GRE V 156`, `GPA 3.07`,
//! `International`, `Fall 2025`. Every tag is checked against every pattern;
//! later tags overwrite earlier ones field by field.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::title_case;
use crate::entry::{Nationality, Season};

static GRE_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgre\D*(\d+(?:\.\d+)?)\b").expect("GRE total pattern"));
static GRE_V: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgre\s+v\s+(\d+(?:\.\d+)?)\b").expect("GRE V pattern"));
static GRE_AW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgre\s+aw\s+(\d+(?:\.\d+)?)\b").expect("GRE AW pattern"));
static GPA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgpa\s+(\d+(?:\.\d+)?)\b").expect("GPA pattern"));
static SEASON_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(fall|spring)\s+(\d{4})").expect("season pattern"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraTags {
    pub gre_total: Option<String>,
    pub gre_v: Option<String>,
    pub gre_aw: Option<String>,
    pub gpa: Option<String>,
    pub nationality: Option<Nationality>,
}

/// Number captured by `re` in `text`, with the byte offset it starts at.
fn capture(re: &Regex, text: &str) -> Option<(usize, String)> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| (m.start(), m.as_str().to_string()))
}

pub fn parse_extra_tags<S: AsRef<str>>(tags: &[S]) -> ExtraTags {
    let mut out = ExtraTags::default();

    for tag in tags {
        let lower = tag.as_ref().to_lowercase();

        let total = capture(&GRE_TOTAL, &lower);
        let verbal = capture(&GRE_V, &lower);
        let writing = capture(&GRE_AW, &lower);

        // The loose total pattern also lands on the number of "gre v 156" /
        // "gre aw 4.5"; that number belongs to the specific section score.
        let claimed = |at: usize| {
            verbal.as_ref().is_some_and(|(s, _)| *s == at)
                || writing.as_ref().is_some_and(|(s, _)| *s == at)
        };
        if let Some((at, n)) = total {
            if !claimed(at) {
                out.gre_total = Some(n);
            }
        }
        if let Some((_, n)) = verbal {
            out.gre_v = Some(n);
        }
        if let Some((_, n)) = writing {
            out.gre_aw = Some(n);
        }
        if let Some((_, n)) = capture(&GPA, &lower) {
            out.gpa = Some(n);
        }

        if lower.contains("american") {
            out.nationality = Some(Nationality::American);
        } else if lower.contains("international") {
            out.nationality = Some(Nationality::International);
        }
    }

    out
}

/// First `Fall YYYY` / `Spring YYYY` found, scanning tags in order.
pub fn parse_season_year<S: AsRef<str>>(tags: &[S]) -> Option<(Season, String)> {
    tags.iter().find_map(|tag| {
        let caps = SEASON_YEAR.captures(tag.as_ref())?;
        let season = Season::parse(&title_case(&caps[1]))?;
        Some((season, caps[2].to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn section_scores_and_total() {
        let t = parse_extra_tags(&["GRE 324", "GRE V 156", "GRE AW 4.50", "GPA 3.07"]);
        assert_eq!(t.gre_total, some("324"));
        assert_eq!(t.gre_v, some("156"));
        assert_eq!(t.gre_aw, some("4.50"));
        assert_eq!(t.gpa, some("3.07"));
        assert_eq!(t.nationality, None);
    }

    #[test]
    fn verbal_tag_leaves_total_alone() {
        let t = parse_extra_tags(&["GRE V 156"]);
        assert_eq!(t.gre_v, some("156"));
        assert_eq!(t.gre_total, None);
    }

    #[test]
    fn total_matches_through_non_digits() {
        assert_eq!(parse_extra_tags(&["gre: 123"]).gre_total, some("123"));
        assert_eq!(parse_extra_tags(&["GRE Total=123"]).gre_total, some("123"));
    }

    #[test]
    fn one_tag_can_fill_several_fields() {
        let t = parse_extra_tags(&["GRE 320 GRE V 160 GPA 3.9 International"]);
        assert_eq!(t.gre_total, some("320"));
        assert_eq!(t.gre_v, some("160"));
        assert_eq!(t.gpa, some("3.9"));
        assert_eq!(t.nationality, Some(Nationality::International));
    }

    #[test]
    fn last_tag_wins() {
        let t = parse_extra_tags(&["GRE 310", "GPA 3.1", "GRE 330", "GPA 3.8"]);
        assert_eq!(t.gre_total, some("330"));
        assert_eq!(t.gpa, some("3.8"));

        let t = parse_extra_tags(&["American", "International"]);
        assert_eq!(t.nationality, Some(Nationality::International));
        let t = parse_extra_tags(&["International", "American"]);
        assert_eq!(t.nationality, Some(Nationality::American));
    }

    #[test]
    fn empty_tags_give_nothing() {
        assert_eq!(parse_extra_tags::<&str>(&[]), ExtraTags::default());
    }

    #[test]
    fn season_year_needs_whitespace() {
        assert_eq!(parse_season_year(&["Fall 2025"]), Some((Season::Fall, s!("2025"))));
        assert_eq!(parse_season_year(&["Fall2025"]), None);
    }

    #[test]
    fn season_year_first_match_title_cased() {
        let tags = ["GRE 320", "SPRING 2024", "Fall 2025"];
        assert_eq!(parse_season_year(&tags), Some((Season::Spring, s!("2024"))));
    }
}
