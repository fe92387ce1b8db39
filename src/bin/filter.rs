// src/bin/filter.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use gradcafe_scrape::{cli::FilterArgs, filter, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let opts = FilterArgs::parse().into_options();
    let kept = filter::run(&opts, std::io::stdout().lock())
        .wrap_err_with(|| format!("filtering {}", opts.in_path.display()))?;

    println!("Kept {} matching rows. Saved {}", kept.rows.len(), opts.out_path.display());
    Ok(())
}
