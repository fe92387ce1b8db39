// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub max_pages: u32,
    pub timeout: Duration,
    /// Sleep between page requests (zero = none).
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            max_pages: MAX_PAGES,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    /// Listing URL for one page, newest first.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}&sort=newest", self.base_url, page)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delim(&self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }

    /// Guess from a file extension; anything that isn't `.tsv` is CSV.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: PathBuf,
    pub preview_rows: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            preview_rows: PREVIEW_ROWS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub in_path: PathBuf,
    pub out_path: PathBuf,
    pub format: ExportFormat,
    pub degree_type: String,
    pub school: String,
    pub head_rows: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            in_path: PathBuf::from(FILTER_IN_FILE),
            out_path: PathBuf::from(FILTER_OUT_FILE),
            format: ExportFormat::Csv,
            degree_type: s!(FILTER_DEGREE),
            school: s!(FILTER_SCHOOL),
            head_rows: FILTER_HEAD_ROWS,
        }
    }
}
