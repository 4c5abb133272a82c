// src/scrape/subject.rs
//
// Correlation between a detail fetch and the record it enriches.
//
// Every detail fetch carries its own `Subject`: it is bound from the job's
// link before the request goes out and travels with the fetched body to the
// enrichment stage. There is no shared "current subject" slot, so two fetches
// in flight can never see each other's subject.

use std::fmt;

use crate::error::FetchError;

/// The record link a detail document belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subject(String);

impl Subject {
    pub fn bind(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn link(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled detail fetch. `ordinal` is the scheduling order, used for jitter.
#[derive(Clone, Debug)]
pub struct DetailJob {
    pub subject: Subject,
    pub ordinal: usize,
}

/// What a fetch worker hands to the enrichment stage.
#[derive(Debug)]
pub struct Delivery {
    pub subject: Subject,
    pub body: Result<String, FetchError>,
}
