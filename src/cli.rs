// src/cli.rs
use std::io::{self, Write};

use clap::{Parser, ValueEnum};

use crate::config::{consts::*, AppOptions, ExportFormat};
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Harvest a paginated badge catalogue into one spreadsheet row per badge.
#[derive(Debug, Parser)]
#[command(name = "badge_scrape", version, about)]
pub struct Args {
    /// Index page URL; `:page` is replaced by the page number
    #[arg(long, default_value = INDEX_URL_TEMPLATE)]
    pub url_template: String,

    /// Last index page to visit (pages start at 1)
    #[arg(long, default_value_t = MAX_PAGE)]
    pub max_page: u32,

    /// Host allowed to be fetched; repeat for several
    #[arg(long = "allowed-domain", default_value = ALLOWED_DOMAIN)]
    pub allowed_domains: Vec<String>,

    /// Only links whose href starts with this are treated as badges
    #[arg(long, default_value = BADGE_PATH_PREFIX)]
    pub badge_prefix: String,

    /// Concurrent detail-page fetchers
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Pause after each detail request, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Fetch each badge's detail page once, even if it is listed again
    #[arg(long)]
    pub no_revisit: bool,

    /// Output file, or a directory ending in a path separator
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Only print warnings and the final summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.url_template = self.url_template;
        opts.scrape.max_page = self.max_page;
        opts.scrape.allowed_domains = self.allowed_domains;
        opts.scrape.badge_prefix = self.badge_prefix;
        opts.scrape.workers = self.workers;
        opts.scrape.request_pause_ms = self.pause_ms;
        opts.scrape.revisit_details = !self.no_revisit;

        opts.export.format = self.format.into();
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Prints the page trace to stdout.
pub struct ConsoleProgress {
    quiet: bool,
    pages: usize,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet, pages: 0 }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.pages = total;
    }

    fn log(&mut self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    fn page_done(&mut self, page: u32, found: usize) {
        if !self.quiet {
            println!("  page {page}/{}: {found} badge links", self.pages);
        }
    }

    fn page_failed(&mut self, page: u32, reason: &str) {
        eprintln!("  page {page}/{} failed: {reason}", self.pages);
    }
}

pub fn run(args: Args) -> Result<RunSummary, ScrapeError> {
    let quiet = args.quiet;
    let opts = args.into_options();
    let mut progress = ConsoleProgress::new(quiet);

    let summary = runner::run(&opts, Some(&mut progress))?;

    let mut out = io::stdout().lock();
    for line in summary.report.summary_lines() {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "Wrote {} rows to {}", summary.rows_written, summary.out_path.display());
    Ok(summary)
}
