// src/scrape/enrich.rs
//
// Detail enrichment: callbacks that read one detail document and merge what
// they find into the record named by the document's subject.

use crate::core::Document;
use crate::specs::detail;
use crate::store::RecordStore;

use super::subject::Subject;

/// One independent extraction step over a detail document.
pub trait Enricher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Apply to `subject`'s record. Returns the number of store writes that landed.
    fn enrich(&self, doc: &Document, subject: &Subject, store: &RecordStore) -> usize;
}

/// Attribute list → `merge_attribute` per pair. Later labels overwrite earlier ones.
pub struct AttributeEnricher;

impl Enricher for AttributeEnricher {
    fn name(&self) -> &'static str { "attributes" }

    fn enrich(&self, doc: &Document, subject: &Subject, store: &RecordStore) -> usize {
        detail::attributes(doc)
            .into_iter()
            .filter(|(label, value)| store.merge_attribute(subject.link(), label, value))
            .count()
    }
}

/// Skills list → `set_tags_if_unset`, once per list found.
pub struct TagEnricher;

impl Enricher for TagEnricher {
    fn name(&self) -> &'static str { "tags" }

    fn enrich(&self, doc: &Document, subject: &Subject, store: &RecordStore) -> usize {
        detail::tag_lists(doc)
            .iter()
            .filter(|tags| store.set_tags_if_unset(subject.link(), tags))
            .count()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The subject did not resolve to a record; nothing was applied.
    pub missed: bool,
    pub applied: usize,
}

/// The callback set run for every detail document.
pub struct Enrichers {
    callbacks: Vec<Box<dyn Enricher>>,
}

impl Default for Enrichers {
    fn default() -> Self {
        Self::new(vec![Box::new(AttributeEnricher), Box::new(TagEnricher)])
    }
}

impl Enrichers {
    pub fn new(callbacks: Vec<Box<dyn Enricher>>) -> Self {
        Self { callbacks }
    }

    /// Run every callback for one document, all against the same subject.
    /// Must complete before the next document is dispatched.
    pub fn dispatch(&self, subject: &Subject, doc: &Document, store: &RecordStore) -> DispatchOutcome {
        if !store.contains(subject.link()) {
            logw!("Enrich: no record for {subject}, dropping detail data");
            return DispatchOutcome { missed: true, applied: 0 };
        }

        let mut applied = 0;
        for cb in &self.callbacks {
            let n = cb.enrich(doc, subject, store);
            logd!("Enrich: {} +{n} for {subject}", cb.name());
            applied += n;
        }
        DispatchOutcome { missed: false, applied }
    }
}
