// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod entry;
pub mod error;
pub mod file;
pub mod filter;
pub mod log;
pub mod normalize;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod table;

pub use entry::{Entry, Nationality, RawEntry, Season};
pub use error::{Error, Result};
pub use table::ResultsTable;
