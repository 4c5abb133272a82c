// src/store.rs
//
// Record store: canonical link → Record.
//
// - Dedup authority: a link is inserted once, at first discovery.
// - Merge authority: enrichment only ever mutates an existing record.
//   Against an unknown link every mutator is a no-op that reports `false`.
// - All operations are total. Callers that care about misses inspect the bool.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::{mapref::entry::Entry, DashMap};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub link: String,
    pub title: String,
    pub attributes: HashMap<String, String>,
    pub tags: Vec<String>,
    /// Discovery ordinal; only used to order snapshots.
    pub seq: u64,
}

impl Record {
    pub fn attribute(&self, label: &str) -> Option<&str> {
        self.attributes.get(label).map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct RecordStore {
    records: DashMap<String, Record>,
    next_seq: AtomicU64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, link: &str) -> Option<Record> {
        self.records.get(link).map(|r| r.value().clone())
    }

    pub fn contains(&self, link: &str) -> bool {
        self.records.contains_key(link)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Atomic check-and-insert. Returns `true` if a stub was created.
    /// A second discovery of the same link never touches the title.
    pub fn insert_if_absent(&self, link: &str, title: &str) -> bool {
        match self.records.entry(s!(link)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(Record {
                    link: s!(link),
                    title: s!(title),
                    seq,
                    ..Record::default()
                });
                true
            }
        }
    }

    /// Set or overwrite one attribute. `false` if the link is unknown.
    pub fn merge_attribute(&self, link: &str, label: &str, value: &str) -> bool {
        match self.records.get_mut(link) {
            Some(mut rec) => {
                rec.attributes.insert(s!(label), s!(value));
                true
            }
            None => false,
        }
    }

    /// First non-empty tag list wins. `false` if the link is unknown,
    /// tags were already set, or `tags` is empty.
    pub fn set_tags_if_unset(&self, link: &str, tags: &[String]) -> bool {
        let Some(mut rec) = self.records.get_mut(link) else {
            return false;
        };
        if !rec.tags.is_empty() || tags.is_empty() {
            return false;
        }
        rec.tags = tags.to_vec();
        true
    }

    /// All records, in discovery order.
    pub fn snapshot(&self) -> Vec<Record> {
        let mut out: Vec<Record> = self.records.iter().map(|r| r.value().clone()).collect();
        out.sort_by_key(|r| r.seq);
        out
    }
}

/// Headers + rows, ready for a tabular writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map_or(0, Vec::len)
    }
}
