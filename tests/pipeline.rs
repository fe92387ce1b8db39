// tests/pipeline.rs
//
// Whole pipeline over an in-memory page source, then the filter over its output.
//
use std::collections::HashMap;

use gradcafe_scrape::config::options::{ExportFormat, FilterOptions, ScrapeOptions};
use gradcafe_scrape::core::net::{FetchOutcome, PageSource, SkipReason};
use gradcafe_scrape::file::read_table;
use gradcafe_scrape::progress::Progress;
use gradcafe_scrape::{filter, scrape};

const PAGE: &str = include_str!("fixtures/results_page.html");
const EMPTY: &str = include_str!("fixtures/empty_page.html");

struct FakeSite {
    pages: HashMap<u32, FetchOutcome>,
}

impl PageSource for FakeSite {
    fn fetch_page(&self, page: u32) -> FetchOutcome {
        self.pages
            .get(&page)
            .cloned()
            .unwrap_or(FetchOutcome::Skip(SkipReason::Status(404)))
    }
}

#[derive(Default)]
struct Recorder {
    total: u32,
    done: Vec<(u32, usize)>,
    skipped: Vec<(u32, SkipReason)>,
    finished: Option<usize>,
}

impl Progress for Recorder {
    fn begin(&mut self, total_pages: u32) { self.total = total_pages; }
    fn page_done(&mut self, page: u32, entries: usize) { self.done.push((page, entries)); }
    fn page_skipped(&mut self, page: u32, reason: &SkipReason) { self.skipped.push((page, reason.clone())); }
    fn finish(&mut self, total_entries: usize) { self.finished = Some(total_entries); }
}

fn site() -> FakeSite {
    let pages = HashMap::from([
        (1, FetchOutcome::Page(PAGE.to_string())),
        (2, FetchOutcome::Skip(SkipReason::Status(500))),
        (3, FetchOutcome::Page(EMPTY.to_string())),
        (4, FetchOutcome::Skip(SkipReason::Transport("timed out".into()))),
        (5, FetchOutcome::Page(PAGE.to_string())),
    ]);
    FakeSite { pages }
}

fn opts(max_pages: u32) -> ScrapeOptions {
    ScrapeOptions { max_pages, ..Default::default() }
}

#[test]
fn failed_pages_are_skipped_and_the_run_continues() {
    let mut rec = Recorder::default();
    let table = scrape::collect(&site(), &opts(5), Some(&mut rec)).unwrap();

    assert_eq!(table.len(), 8);
    assert_eq!(rec.total, 5);
    assert_eq!(rec.done, vec![(1, 4), (3, 0), (5, 4)]);
    assert_eq!(
        rec.skipped,
        vec![(2, SkipReason::Status(500)), (4, SkipReason::Transport("timed out".into()))]
    );
    assert_eq!(rec.finished, Some(8));
}

#[test]
fn pages_keep_their_order() {
    let table = scrape::collect(&site(), &opts(5), None).unwrap();
    let schools: Vec<&str> = table.entries().iter().map(|e| e.school.as_str()).collect();
    assert_eq!(schools[0], "Stanford University");
    assert_eq!(schools[4], "Stanford University");
    assert_eq!(schools[7], "University of California-San Diego");
}

#[test]
fn only_server_errors_yields_empty_table() {
    let dead = FakeSite { pages: HashMap::new() };
    let table = scrape::collect(&dead, &opts(3), None).unwrap();
    assert!(table.is_empty());
}

#[test]
fn written_table_round_trips_through_the_filter() {
    let dir = tempfile::tempdir().unwrap();
    let scraped = dir.path().join("results.csv");
    let filtered = dir.path().join("filtered/ucsd.csv");

    let table = scrape::collect(&site(), &opts(5), None).unwrap();
    table.write_to_path(&scraped, ExportFormat::Csv).unwrap();

    let written = read_table(&scraped, ExportFormat::Csv).unwrap();
    assert_eq!(written.headers[0], "School");
    assert_eq!(written.headers.len(), 16);
    assert_eq!(written.rows.len(), 8);
    assert_eq!(written.rows[0][14], "['Fall 2025', 'International', 'GPA 3.90', 'GRE 330', 'GRE V 162', 'GRE AW 4.50']");

    let fopts = FilterOptions {
        in_path: scraped.clone(),
        out_path: filtered.clone(),
        ..Default::default()
    };
    let mut printed = Vec::new();
    let kept = filter::run(&fopts, &mut printed).unwrap();

    // UCSD + PhD appears twice per fixture page
    assert_eq!(kept.rows.len(), 4);

    // ISO dates written by the scraper come back as the same dates
    let posted = kept.column("Date_Posted").unwrap();
    let decided = kept.column("DecisionDate").unwrap();
    assert_eq!(kept.rows[0][posted], "2025-03-01");
    assert_eq!(kept.rows[0][decided], "2025-02-28");
    assert_eq!(kept.rows[1][decided], "2024-07-10");

    let saved = read_table(&filtered, ExportFormat::Csv).unwrap();
    assert_eq!(saved, kept);

    let printed = String::from_utf8(printed).unwrap();
    assert_eq!(printed.lines().count(), 1 + 4);
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "x").unwrap();

    let table = scrape::collect(&site(), &opts(1), None).unwrap();
    let err = table.write_to_path(&blocker.join("out.csv"), ExportFormat::Csv);
    assert!(err.is_err());
}
