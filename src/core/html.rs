// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// Text of an element with every text node trimmed and the pieces glued
/// together without separators (BeautifulSoup's `get_text(strip=True)`).
pub fn strip_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Stripped text of the first descendant matching `sel`, if any.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(strip_text)
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn strip_text_glues_trimmed_nodes() {
        let doc = Html::parse_fragment("<div>  Education Policy <svg></svg>\n <b> PhD </b></div>");
        let div = doc.select(&selector("div").unwrap()).next().unwrap();
        assert_eq!(strip_text(div), "Education PolicyPhD");
    }

    #[test]
    fn class_membership_is_exact() {
        let doc = Html::parse_fragment(r#"<table><tr class="tw-border-none x"></tr><tr class="tw-border-nonex"></tr></table>"#);
        let rows: Vec<_> = doc.select(&selector("tr").unwrap()).collect();
        assert!(has_class(rows[0], "tw-border-none"));
        assert!(!has_class(rows[1], "tw-border-none"));
    }

    #[test]
    fn bad_selector_is_reported() {
        let err = selector("div[").unwrap_err();
        assert!(err.to_string().contains("div["));
    }
}
