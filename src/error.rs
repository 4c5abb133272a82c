// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a single index or detail fetch produced no document.
/// Never fatal: the crawl records it and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{url} is outside the allowed domains")]
    Disallowed { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Disallowed { url }
            | FetchError::Status { url, .. }
            | FetchError::Http { url, .. } => url,
        }
    }
}

/// Writing the output table failed. Always propagated.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not encode row: {0}")]
    Csv(#[from] csv::Error),
}

/// Top-level failure of a full run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Export(#[from] ExportError),
}
