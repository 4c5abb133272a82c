// src/specs/detail.rs
// Badge detail page: attribute list (Type/Level/Time/Cost/...) and skills list.

use crate::config::consts::{
    ATTR_ITEM_SELECTOR, ATTR_LABEL_SELECTOR, ATTR_LIST_CLASS, ATTR_VALUE_SELECTOR, TAG_LIST_CLASS,
};
use crate::core::html::{child_text, has_exact_class, selector, Document};

/// (label, value) pairs from every attribute list on the page, in document order.
/// A label may repeat; the caller decides what a repeat means.
pub fn attributes(doc: &Document) -> Vec<(String, String)> {
    let (Some(lists), Some(items), Some(label), Some(value)) = (
        selector("ul[class]"),
        selector(ATTR_ITEM_SELECTOR),
        selector(ATTR_LABEL_SELECTOR),
        selector(ATTR_VALUE_SELECTOR),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for ul in doc.select(&lists).filter(|ul| has_exact_class(*ul, ATTR_LIST_CLASS)) {
        for li in ul.select(&items) {
            out.push((child_text(li, &label), child_text(li, &value)));
        }
    }
    out
}

/// One tag list per skills container, each in document order.
/// Items without anchor text are dropped.
pub fn tag_lists(doc: &Document) -> Vec<Vec<String>> {
    let (Some(lists), Some(items), Some(anchor)) =
        (selector("ul[class]"), selector("li"), selector("a"))
    else {
        return Vec::new();
    };

    doc.select(&lists)
        .filter(|ul| has_exact_class(*ul, TAG_LIST_CLASS))
        .map(|ul| {
            ul.select(&items)
                .map(|li| child_text(li, &anchor))
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .collect()
}
