// src/scrape/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc::{self, Receiver, Sender}, Mutex },
};

use crate::{
    config::ScrapeOptions,
    core::{ Document, DomainFilter, Fetcher },
    error::FetchError,
    progress::{ NullProgress, Progress },
    store::RecordStore,
};

use super::{
    enrich::Enrichers,
    index,
    report::{ Failure, RunReport },
    subject::{ DetailJob, Delivery },
};

/// Result of a full crawl: the finalized store plus what went wrong along the way.
pub struct Collected {
    pub store: RecordStore,
    pub report: RunReport,
}

/// Crawl index and detail pages with the default enrichment callbacks.
pub fn collect_badges(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetcher,
    progress: Option<&mut dyn Progress>,
) -> Collected {
    collect_with(opts, fetcher, &Enrichers::default(), progress)
}

/// Two-stage crawl.
///
/// The calling thread walks the index and feeds detail jobs to `opts.workers`
/// fetch threads. Fetched bodies go, together with their subject, to a single
/// enrichment thread that parses each one and runs every callback before
/// taking the next. Returns once all scheduled fetches have been enriched.
pub fn collect_with(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetcher,
    enrichers: &Enrichers,
    progress: Option<&mut dyn Progress>,
) -> Collected {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let store = RecordStore::new();
    let filter = DomainFilter::new(opts.allowed_domains.as_slice());
    let mut report = RunReport::default();

    progress.begin(opts.max_page as usize);

    let (job_tx, job_rx) = mpsc::channel::<DetailJob>();
    let job_rx = Mutex::new(job_rx);
    let (res_tx, res_rx) = mpsc::channel::<Delivery>();
    let workers = opts.workers.max(1);

    let tally = thread::scope(|s| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (jobs, filter) = (&job_rx, &filter);
            s.spawn(move || fetch_worker(jobs, tx, fetcher, filter, opts));
        }
        drop(res_tx); // enrichment thread is sole receiver now

        let consumer = s.spawn(|| enrich_loop(res_rx, &store, enrichers));

        index::traverse(opts, fetcher, &filter, &store, &mut report, &mut *progress, |job| {
            if job_tx.send(job).is_err() {
                loge!("Detail: workers gone, job dropped");
            }
        });
        drop(job_tx); // workers drain the queue and exit

        consumer.join().unwrap_or_else(|_| {
            loge!("Enrich: consumer thread panicked");
            EnrichTally::default()
        })
    });

    report.details_enriched = tally.enriched;
    report.details_failed = tally.failed;
    report.skipped.extend(tally.skipped);
    report.correlation_misses = tally.misses;

    logf!(
        "Scrape: {} records, {} pages, {} detail fetches ({} failed)",
        store.len(),
        report.pages_visited,
        report.details_scheduled,
        report.details_failed.len()
    );

    progress.finish();

    Collected { store, report }
}

fn fetch_worker(
    jobs: &Mutex<Receiver<DetailJob>>,
    tx: Sender<Delivery>,
    fetcher: &dyn Fetcher,
    filter: &DomainFilter,
    opts: &ScrapeOptions,
) {
    loop {
        let next = match jobs.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break, // another worker panicked holding the queue
        };
        let Ok(job) = next else {
            break; // queue closed and drained
        };

        let link = job.subject.link();
        let (body, requested) = match filter.check(link) {
            Ok(_) => (fetcher.fetch(link), true),
            Err(e) => (Err(e), false),
        };

        if tx.send(Delivery { subject: job.subject, body }).is_err() {
            break; // enrichment ended early; bail gracefully
        }

        if requested {
            let jitter = if opts.jitter_ms == 0 { 0 } else { job.ordinal as u64 % opts.jitter_ms };
            thread::sleep(Duration::from_millis(opts.request_pause_ms + jitter)); // be polite
        }
    }
}

#[derive(Default)]
struct EnrichTally {
    enriched: usize,
    failed: Vec<Failure>,
    skipped: Vec<Failure>,
    misses: usize,
}

fn enrich_loop(rx: Receiver<Delivery>, store: &RecordStore, enrichers: &Enrichers) -> EnrichTally {
    let mut tally = EnrichTally::default();

    for Delivery { subject, body } in rx {
        match body.and_then(|b| Document::parse(subject.link(), &b)) {
            Ok(doc) => {
                let out = enrichers.dispatch(&subject, &doc, store);
                if out.missed {
                    tally.misses += 1;
                } else {
                    tally.enriched += 1;
                }
            }
            Err(e @ (FetchError::Disallowed { .. } | FetchError::InvalidUrl { .. })) => {
                logw!("Detail: skipping {subject}: {e}");
                tally.skipped.push(Failure::from(&e));
            }
            Err(e) => {
                loge!("Detail: {e}");
                tally.failed.push(Failure::from(&e));
            }
        }
    }
    tally
}
