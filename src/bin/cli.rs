// src/bin/cli.rs
use badge_scrape::{cli, log};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(args.quiet);

    cli::run(args)?;
    Ok(())
}
