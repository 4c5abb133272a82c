// src/scrape/report.rs
//
// Aggregated outcome of one crawl. Nothing in the crawl is fatal, so this is
// where skipped pages, failed fetches and correlation misses end up.

use crate::error::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub url: String,
    pub reason: String,
}

impl From<&FetchError> for Failure {
    fn from(e: &FetchError) -> Self {
        Self { url: s!(e.url()), reason: e.to_string() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub pages_visited: usize,
    pub pages_failed: Vec<Failure>,
    /// Badge link occurrences on index pages, duplicates included.
    pub links_seen: usize,
    pub details_scheduled: usize,
    pub details_enriched: usize,
    pub details_failed: Vec<Failure>,
    /// URLs never attempted: outside the allowed domains or unparsable.
    pub skipped: Vec<Failure>,
    /// Detail documents whose subject did not resolve to a known record.
    pub correlation_misses: usize,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.pages_failed.is_empty()
            && self.details_failed.is_empty()
            && self.skipped.is_empty()
            && self.correlation_misses == 0
    }

    /// Human-readable end-of-run summary, one line per fact.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("Index pages visited: {}", self.pages_visited),
            format!(
                "Badge links seen: {} (detail fetches scheduled: {})",
                self.links_seen, self.details_scheduled
            ),
            format!("Detail pages enriched: {}", self.details_enriched),
        ];

        let sections: [(&str, &[Failure]); 3] = [
            ("Index pages failed", &self.pages_failed),
            ("Detail fetches failed", &self.details_failed),
            ("Skipped", &self.skipped),
        ];
        for (label, failures) in sections {
            if failures.is_empty() {
                continue;
            }
            out.push(format!("{label}: {}", failures.len()));
            out.extend(failures.iter().map(|f| format!("  {}", f.reason)));
        }

        if self.correlation_misses > 0 {
            out.push(format!("Correlation misses: {}", self.correlation_misses));
        }
        out
    }
}
