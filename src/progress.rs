// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of index pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// An index page was fetched and scanned. `found` counts badge links on it.
    fn page_done(&mut self, _page: u32, _found: usize) {}

    /// An index page could not be fetched or was not attempted.
    fn page_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
