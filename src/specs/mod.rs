// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction: each spec knows *where the ground truth lives in
//! the HTML* for one kind of page and turns a parsed [`Document`] into plain
//! data. Specs never fetch, never touch the record store and never log per
//! element; orchestration lives in `scrape`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_badges → scrape::index  → specs::index::parse_doc
//!                                 ↘ scrape::enrich → specs::detail::{attributes, tag_lists}
//! ```
//!
//! ## Conventions
//! - Text is whitespace-normalized (`core::sanitize::normalize_ws`).
//! - Class matching on list containers is exact, as the site emits them.
//! - Specs are testable offline against small synthetic snippets.
//!
//! [`Document`]: crate::core::Document
pub mod detail;
pub mod index;
