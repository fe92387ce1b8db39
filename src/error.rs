// src/error.rs
use std::io;
use thiserror::Error;

/// Failures that can escape the library.
///
/// Page-level problems (bad status, timeouts, malformed rows, unparseable dates)
/// never surface here; they degrade to skipped pages or empty fields.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid CSS selector `{0}`")]
    Selector(String),

    #[error("table is missing required column `{0}`")]
    MissingColumn(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
