// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::consts::*;
use crate::config::options::{ExportFormat, ExportOptions, FilterOptions, ScrapeOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Scrape GradCafe admissions results into a CSV/TSV table.
#[derive(Debug, Parser)]
#[command(name = "gradcafe_scrape", version)]
pub struct ScrapeArgs {
    /// Survey listing URL (page and sort are appended)
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Number of listing pages to visit, starting at 1
    #[arg(short = 'n', long, default_value_t = MAX_PAGES)]
    pub pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause between page requests in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Output format; defaults to the output file's extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Rows to print after the run
    #[arg(long, default_value_t = PREVIEW_ROWS)]
    pub preview: usize,
}

impl ScrapeArgs {
    pub fn into_options(mut self) -> (ScrapeOptions, ExportOptions) {
        let format = self
            .format
            .map(ExportFormat::from)
            .unwrap_or_else(|| ExportFormat::from_path(&self.out));
        // A bare `-o results` gets the extension of the chosen format.
        if self.out.extension().is_none() {
            self.out.set_extension(format.ext());
        }
        let scrape = ScrapeOptions {
            base_url: self.base_url,
            max_pages: self.pages,
            timeout: Duration::from_secs(self.timeout_secs),
            pause: Duration::from_millis(self.pause_ms),
        };
        let export = ExportOptions { format, out_path: self.out, preview_rows: self.preview };
        (scrape, export)
    }
}

/// Filter a scraped results table by degree type and school.
#[derive(Debug, Parser)]
#[command(name = "gradcafe_filter", version)]
pub struct FilterArgs {
    /// Table to read (header row required)
    #[arg(short, long, default_value = FILTER_IN_FILE)]
    pub input: PathBuf,

    /// Where to save the matching rows
    #[arg(short, long, default_value = FILTER_OUT_FILE)]
    pub out: PathBuf,

    /// Degree_Type must equal this
    #[arg(long, default_value = FILTER_DEGREE)]
    pub degree: String,

    /// School must equal this
    #[arg(long, default_value = FILTER_SCHOOL)]
    pub school: String,

    /// Matching rows to print
    #[arg(long, default_value_t = FILTER_HEAD_ROWS)]
    pub head: usize,

    /// Delimiter of both files; defaults to the input file's extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl FilterArgs {
    pub fn into_options(self) -> FilterOptions {
        let format = self
            .format
            .map(ExportFormat::from)
            .unwrap_or_else(|| ExportFormat::from_path(&self.input));
        FilterOptions {
            in_path: self.input,
            out_path: self.out,
            format,
            degree_type: self.degree,
            school: self.school,
            head_rows: self.head,
        }
    }
}
