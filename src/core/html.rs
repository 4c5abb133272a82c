// src/core/html.rs
// Parsed-document collaborator on top of `scraper`.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::normalize_ws;
use crate::error::FetchError;

/// An HTML page together with the URL it was fetched from.
pub struct Document {
    url: Url,
    html: Html,
}

impl Document {
    pub fn parse(url: &str, body: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: s!(url),
            reason: e.to_string(),
        })?;
        Ok(Self { url, html: Html::parse_document(body) })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }

    /// Resolve `href` against the document URL. Fragments are dropped.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let mut abs = self.url.join(href.trim()).ok()?;
        abs.set_fragment(None);
        Some(abs.into())
    }
}

/// Parse a CSS selector, logging instead of panicking on bad input.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("bad selector {css:?}: {e}");
            None
        }
    }
}

/// All text under `el`, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of every descendant of `el` matching `sel`, concatenated and normalized.
pub fn child_text(el: ElementRef<'_>, sel: &Selector) -> String {
    let joined: String = el.select(sel).flat_map(|child| child.text()).collect();
    normalize_ws(&joined)
}

/// True if the element's class attribute is exactly `class` (modulo spacing).
pub fn has_exact_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|c| normalize_ws(c) == class)
}
