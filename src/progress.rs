// src/progress.rs
use crate::core::net::SkipReason;

/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to visit.
    fn begin(&mut self, _total_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was fetched and parsed into `entries` records.
    fn page_done(&mut self, _page: u32, _entries: usize) {}

    /// A page contributed nothing because it could not be fetched.
    fn page_skipped(&mut self, _page: u32, _reason: &SkipReason) {}

    /// Called at the end with the total number of records collected.
    fn finish(&mut self, _total_entries: usize) {}
}

/// CLI sink: everything goes to the logger.
#[derive(Default)]
pub struct LogProgress {
    total: u32,
}

impl Progress for LogProgress {
    fn begin(&mut self, total_pages: u32) {
        self.total = total_pages;
        logf!("Scraping {total_pages} page(s)");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn page_done(&mut self, page: u32, entries: usize) {
        logf!("Page {page}/{}: {entries} entries", self.total);
    }

    fn page_skipped(&mut self, page: u32, reason: &SkipReason) {
        logw!("Skipping page {page}/{}: {reason}", self.total);
    }

    fn finish(&mut self, total_entries: usize) {
        logf!("Done: {total_entries} entries");
    }
}
