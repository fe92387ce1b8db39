// src/scrape.rs
//! The pipeline driver: pages 1..=N in order, one at a time.
//!
//! ```text
//! PageSource::fetch_page(n) → specs::results::parse_doc → normalize → ResultsTable
//! ```
//! A page that can't be fetched, or that has no results table, adds nothing;
//! the loop moves on to the next page.

use std::thread;

use crate::{
    config::options::ScrapeOptions,
    core::net::{FetchOutcome, HttpFetcher, PageSource},
    error::Result,
    normalize::normalize,
    progress::Progress,
    specs,
    table::ResultsTable,
};

/// Scrape the live site with a reqwest client.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<ResultsTable> {
    let fetcher = HttpFetcher::new(opts)?;
    collect(&fetcher, opts, progress)
}

/// Drive any page source through the pipeline and return the table.
pub fn collect(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ResultsTable> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.max_pages);
    }

    let mut table = ResultsTable::new();

    for page in 1..=opts.max_pages {
        if page > 1 && !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping page {page}: {}", opts.page_url(page)));
        }

        let html_doc = match source.fetch_page(page) {
            FetchOutcome::Page(body) => body,
            FetchOutcome::Skip(reason) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.page_skipped(page, &reason);
                }
                continue;
            }
        };

        let t = std::time::Instant::now();
        let raw = specs::results::parse_doc(&html_doc)?;
        let count = raw.len();
        table.extend(raw.into_iter().map(normalize));
        logd!("Page {page}: parsed {count} entries in {:?}", t.elapsed());

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, count);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(table.len());
    }
    Ok(table)
}
