// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::AppOptions,
    core::{Fetcher, HttpFetcher},
    error::ScrapeError,
    export, file,
    progress::Progress,
    scrape::{self, RunReport},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub rows_written: usize,
    pub report: RunReport,
}

/// Top-level runner: crawl over HTTP, then export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let fetcher = HttpFetcher::new()?;
    run_with(opts, &fetcher, progress)
}

/// Same as [`run`] with a caller-supplied fetcher.
/// Crawl problems end up in the report; only export failures are errors.
pub fn run_with(
    opts: &AppOptions,
    fetcher: &dyn Fetcher,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    opts.validate()?;

    logf!(
        "Scrape: Begin pages=1..={} template={}",
        opts.scrape.max_page,
        opts.scrape.url_template
    );
    let collected = scrape::collect_badges(&opts.scrape, fetcher, progress);

    let ds = export::to_dataset(&collected.store.snapshot());
    let out_path = file::export_dataset(&opts.export, &ds)?;

    Ok(RunSummary {
        out_path,
        rows_written: ds.row_count(),
        report: collected.report,
    })
}
