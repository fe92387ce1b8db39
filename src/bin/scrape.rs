// src/bin/scrape.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use gradcafe_scrape::{cli::ScrapeArgs, log, progress::LogProgress, scrape};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let (scrape_opts, export) = ScrapeArgs::parse().into_options();

    let mut progress = LogProgress::default();
    let table = scrape::run(&scrape_opts, Some(&mut progress))?;

    table
        .write_to_path(&export.out_path, export.format)
        .wrap_err_with(|| format!("writing {}", export.out_path.display()))?;

    table.preview(std::io::stdout().lock(), export.preview_rows)?;
    println!("Saved {}", export.out_path.display());
    Ok(())
}
