// tests/common/mod.rs
//
// Offline fetcher + HTML builders shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use badge_scrape::config::ScrapeOptions;
use badge_scrape::core::Fetcher;
use badge_scrape::error::FetchError;

pub const HOST: &str = "badges.test";

pub fn index_url(page: u32) -> String {
    format!("https://{HOST}/organizations/ibm/badges?page={page}")
}

pub fn badge_url(slug: &str) -> String {
    format!("https://{HOST}/org/ibm/badge/{slug}")
}

/// Scrape options pointing at the fake host, no politeness delays.
pub fn options(max_page: u32, workers: usize) -> ScrapeOptions {
    ScrapeOptions {
        url_template: format!("https://{HOST}/organizations/ibm/badges?page=:page"),
        max_page,
        allowed_domains: vec![HOST.to_string()],
        workers,
        request_pause_ms: 0,
        jitter_ms: 0,
        ..ScrapeOptions::default()
    }
}

/// Index page listing `(slug, title)` badges as relative links.
pub fn index_page(badges: &[(&str, &str)]) -> String {
    let anchors: String = badges
        .iter()
        .map(|(slug, title)| {
            format!(r#"<a href="/org/ibm/badge/{slug}" title="{title}"><div>{title}</div></a>"#)
        })
        .collect();
    format!(
        r#"<html><body><div class="grid">{anchors}</div>
           <a href="/organizations/ibm/badges?page=99">Next</a></body></html>"#
    )
}

/// Detail page with the given attribute pairs and skills.
pub fn detail_page(attrs: &[(&str, &str)], tags: &[&str]) -> String {
    let items: String = attrs
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<li class="cr-badges-template-attributes__item">
                     <span class="cr-badges-template-attributes__label">{label}</span>
                     <span class="cr-badges-template-attributes__value">{value}</span>
                   </li>"#
            )
        })
        .collect();
    let skills: String = tags.iter().map(|t| format!(r#"<li><a href="/skills/x">{t}</a></li>"#)).collect();
    format!(
        r#"<html><body>
             <ul class="cr-badges-template-attributes cr-badges-template-attributes--normal hide-mobile">{items}</ul>
             <ul class="cr-badges-badge-skills__skills">{skills}</ul>
           </body></html>"#
    )
}

enum Reply {
    Body(String),
    Status(u16),
}

/// In-memory fetcher. Unknown URLs answer 404. Every call is recorded.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    /// Per-URL artificial latency, derived from the URL.
    jitter: bool,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), Reply::Body(body.into()));
        self
    }

    pub fn status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), Reply::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.jitter {
            let spread = url.bytes().fold(7u64, |h, b| h.wrapping_mul(31).wrapping_add(b as u64)) % 4;
            thread::sleep(Duration::from_millis(spread));
        }

        match self.pages.get(url) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}
