// src/specs/index.rs
use crate::core::html::{selector, text_of, Document};

/// One badge listing found on an index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeLink {
    /// Absolute URL of the detail page.
    pub link: String,
    pub title: String,
}

/// Every `a[href]` whose raw href starts with `badge_prefix`, in document order.
/// Duplicates are kept; dedup is the store's job.
pub fn parse_doc(doc: &Document, badge_prefix: &str) -> Vec<BadgeLink> {
    let Some(anchors) = selector("a[href]") else {
        return Vec::new();
    };

    doc.select(&anchors)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if !href.starts_with(badge_prefix) {
                return None;
            }
            let link = doc.resolve(href)?;
            let title = match a.value().attr("title") {
                Some(t) if !t.trim().is_empty() => t.trim().to_string(),
                _ => text_of(a),
            };
            Some(BadgeLink { link, title })
        })
        .collect()
}
