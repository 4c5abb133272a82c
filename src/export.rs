// src/export.rs
// Record → output row. Column order and header text are a fixed contract.

use crate::config::consts::{ATTRIBUTE_COLUMNS, HEADERS, NO_VALUE};
use crate::store::{DataSet, Record};

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Title, Link, Type, Level, Time, Cost, Skills. Missing values become `N/A`.
pub fn record_row(rec: &Record) -> Vec<String> {
    let mut row = Vec::with_capacity(HEADERS.len());
    row.push(rec.title.clone());
    row.push(rec.link.clone());
    for label in ATTRIBUTE_COLUMNS {
        row.push(s!(rec.attribute(label).unwrap_or(NO_VALUE)));
    }
    row.push(if rec.tags.is_empty() { s!(NO_VALUE) } else { rec.tags.join(",") });
    row
}

pub fn to_dataset(records: &[Record]) -> DataSet {
    DataSet {
        headers: Some(headers()),
        rows: records.iter().map(record_row).collect(),
    }
}
