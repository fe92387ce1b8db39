// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of where the data lives in the HTML and how to
//! pull it out. A spec takes markup and returns raw rows; it does not fetch,
//! normalize, cache or export.
//!
//! ## Typical call chain
//! ```text
//! scrape::run → PageSource::fetch_page(n) → specs::results::parse_doc(html)
//!                                         ↘ normalize::normalize(raw) → ResultsTable
//! ```
//!
//! ## Conventions
//! - Selectors live in `config::consts` so a markup change is a one-line fix.
//! - Tolerant: a missing table or a short row means fewer entries, never an error.
//! - Testable offline against saved pages (`tests/fixtures/`).
pub mod results;
