// src/scrape/index.rs
//
// Index traversal: walk index pages 1..=max_page in order, create a stub per
// newly seen badge link and schedule a detail fetch for every occurrence.

use std::collections::HashSet;

use crate::config::ScrapeOptions;
use crate::core::{Document, DomainFilter, Fetcher};
use crate::progress::Progress;
use crate::specs;
use crate::store::RecordStore;

use super::report::{Failure, RunReport};
use super::subject::{DetailJob, Subject};

/// Traverse the index. `schedule` receives each detail job as soon as it is known.
/// Page failures are recorded in `report` and never stop the walk.
pub fn traverse(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetcher,
    filter: &DomainFilter,
    store: &RecordStore,
    report: &mut RunReport,
    progress: &mut dyn Progress,
    mut schedule: impl FnMut(DetailJob),
) {
    let mut scheduled: HashSet<String> = HashSet::new();

    for (page, url) in (1u32..).zip(opts.page_urls()) {
        if let Err(e) = filter.check(&url) {
            logw!("Index: skipping page {page}: {e}");
            progress.page_failed(page, &e.to_string());
            report.skipped.push(Failure::from(&e));
            continue;
        }

        progress.log(&format!("Visiting {url}"));

        let doc = match fetcher.fetch(&url).and_then(|body| Document::parse(&url, &body)) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Index: page {page}: {e}");
                progress.page_failed(page, &e.to_string());
                report.pages_failed.push(Failure::from(&e));
                continue;
            }
        };
        report.pages_visited += 1;

        let links = specs::index::parse_doc(&doc, &opts.badge_prefix);
        logd!("Index: page {page} has {} badge links", links.len());

        for found in &links {
            report.links_seen += 1;
            if store.insert_if_absent(&found.link, &found.title) {
                logd!("Index: new badge {:?} → {}", found.title, found.link);
            }

            let first_time = scheduled.insert(found.link.clone());
            if !opts.revisit_details && !first_time {
                continue;
            }
            schedule(DetailJob {
                subject: Subject::bind(found.link.as_str()),
                ordinal: report.details_scheduled,
            });
            report.details_scheduled += 1;
        }

        progress.page_done(page, links.len());
    }
}
