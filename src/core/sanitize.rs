// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Date text as the parsers want it: no commas, single spaces, trimmed.
pub fn clean_date_text(s: &str) -> String {
    normalize_ws(&s.replace(',', ""))
}

/// Split `"Accepted on 24 Dec"` into `("Accepted", "24 Dec")` on the first `" on "`.
/// Without the separator the whole text is the decision and the date is empty.
pub fn split_decision(text: &str) -> (String, String) {
    match text.split_once(" on ") {
        Some((kind, date)) => (kind.trim().to_string(), date.trim().to_string()),
        None => (text.to_string(), s!()),
    }
}

/// `fall` → `Fall`, `SPRING` → `Spring`.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}
