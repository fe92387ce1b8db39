// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.thegradcafe.com/survey/index.php";
pub const USER_AGENT: &str = "gradcafe_scrape/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_MS: u64 = 0;

// Scrape
pub const MAX_PAGES: u32 = 50;

// Page markup (Tailwind class signatures)
pub const RESULTS_TABLE_SEL: &str = "table.tw-min-w-full.tw-divide-y.tw-divide-gray-300";
pub const BODY_ROWS_SEL: &str = "tbody tr";
pub const SCHOOL_SEL: &str = "div.tw-font-medium.tw-text-gray-900.tw-text-sm";
pub const TAG_SEL: &str = "div.tw-inline-flex";
pub const COMMENT_SEL: &str = "p.tw-text-gray-500.tw-text-sm.tw-my-0";
pub const CONTINUATION_CLASS: &str = "tw-border-none";

// Export
pub const DEFAULT_OUT_FILE: &str = "gradcafe_with_program_and_effective_year.csv";
pub const PREVIEW_ROWS: usize = 30;

// Filter
pub const FILTER_IN_FILE: &str = "gradcafe.csv";
pub const FILTER_OUT_FILE: &str = "gradcafe_filtered.csv";
pub const FILTER_DEGREE: &str = "PhD";
pub const FILTER_SCHOOL: &str = "University of California-San Diego";
pub const FILTER_HEAD_ROWS: usize = 20;
