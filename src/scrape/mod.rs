// src/scrape/mod.rs
pub mod enrich;
pub mod index;
pub mod report;
pub mod subject;
mod scrape;

pub use enrich::{Enricher, Enrichers};
pub use report::{Failure, RunReport};
pub use scrape::{collect_badges, collect_with, Collected};
pub use subject::Subject;
