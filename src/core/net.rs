// src/core/net.rs
// Fetch collaborator: URL in, HTML body out.

use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Anything that can turn a URL into an HTML body.
/// Shared across worker threads, hence `Send + Sync`.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher. No retries; redirects are followed.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let http_err = |source| FetchError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http_err)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(http_err)
    }
}

/// Host allow-list applied before any request is attempted.
/// Exact, case-insensitive host match. An empty list allows everything.
#[derive(Clone, Debug, Default)]
pub struct DomainFilter {
    hosts: Vec<String>,
}

impl DomainFilter {
    pub fn new<S: AsRef<str>>(hosts: &[S]) -> Self {
        Self {
            hosts: hosts
                .iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Parse `url` and check its host. Only http(s) URLs pass.
    pub fn check(&self, url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: s!(url),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: s!(url),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        if self.hosts.is_empty() {
            return Ok(parsed);
        }

        let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();
        if self.hosts.iter().any(|h| *h == host) {
            Ok(parsed)
        } else {
            Err(FetchError::Disallowed { url: s!(url) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_allows_exact_host_only() {
        let f = DomainFilter::new(&["www.youracclaim.com"]);
        assert!(f.check("https://www.youracclaim.com/org/ibm/badge/x").is_ok());
        assert!(f.check("https://WWW.YourAcclaim.com/a").is_ok());
        assert!(matches!(
            f.check("https://youracclaim.com/a"),
            Err(FetchError::Disallowed { .. })
        ));
        assert!(matches!(
            f.check("https://evil.example/a"),
            Err(FetchError::Disallowed { .. })
        ));
    }

    #[test]
    fn filter_rejects_garbage_and_other_schemes() {
        let f = DomainFilter::default();
        assert!(matches!(f.check("not a url"), Err(FetchError::InvalidUrl { .. })));
        assert!(matches!(f.check("ftp://h/x"), Err(FetchError::InvalidUrl { .. })));
        assert!(f.check("http://anything.example/").is_ok());
    }
}
