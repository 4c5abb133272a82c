// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn validate(&self) -> Result<(), ScrapeError> {
        self.scrape.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Index URL with a `:page` placeholder.
    pub url_template: String,
    /// Last index page, inclusive. Pages start at 1.
    pub max_page: u32,
    /// Hosts we may fetch from. Empty means unrestricted.
    pub allowed_domains: Vec<String>,
    /// Only hrefs with this prefix are treated as badge detail links.
    pub badge_prefix: String,
    pub workers: usize,
    pub request_pause_ms: u64,
    pub jitter_ms: u64,
    /// Schedule a detail fetch for every occurrence of a link, not just the first.
    pub revisit_details: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url_template: s!(INDEX_URL_TEMPLATE),
            max_page: MAX_PAGE,
            allowed_domains: vec![s!(ALLOWED_DOMAIN)],
            badge_prefix: s!(BADGE_PATH_PREFIX),
            workers: WORKERS,
            request_pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
            revisit_details: true,
        }
    }
}

impl ScrapeOptions {
    /// Index page URLs in traversal order: 1..=max_page.
    pub fn page_urls(&self) -> Vec<String> {
        (1..=self.max_page)
            .map(|page| self.url_template.replace(PAGE_PLACEHOLDER, &page.to_string()))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if !self.url_template.contains(PAGE_PLACEHOLDER) {
            return Err(ScrapeError::Config(format!(
                "URL template must contain {PAGE_PLACEHOLDER}: {}",
                self.url_template
            )));
        }
        if self.max_page == 0 {
            return Err(ScrapeError::Config(s!("max page must be at least 1")));
        }
        if self.workers == 0 {
            return Err(ScrapeError::Config(s!("need at least one worker")));
        }
        if self.badge_prefix.is_empty() {
            return Err(ScrapeError::Config(s!("badge path prefix is empty")));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension is kept; otherwise the format decides.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let name = match &self.out_path.ext {
            Some(ext) => join!(stem, ".", &ext.to_string_lossy()),
            None => join!(stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ optional extension).
    /// A trailing separator or an existing directory keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = Path::new(s);

        if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            self.out_path.dir = p.to_path_buf();
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn delim(&self) -> u8 {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_urls_are_one_based_and_inclusive() {
        let opts = ScrapeOptions {
            url_template: s!("https://h/list?page=:page"),
            max_page: 3,
            ..ScrapeOptions::default()
        };
        assert_eq!(
            opts.page_urls(),
            vec!["https://h/list?page=1", "https://h/list?page=2", "https://h/list?page=3"]
        );
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let opts = ScrapeOptions { url_template: s!("https://h/list"), ..ScrapeOptions::default() };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("out").join("IBM-Badges.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out").join("IBM-Badges.tsv"));
    }

    #[test]
    fn user_extension_survives_format_change() {
        let mut export = ExportOptions::default();
        export.set_path("reports/badges.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("reports").join("badges.txt"));
    }

    #[test]
    fn trailing_separator_means_directory() {
        let mut export = ExportOptions::default();
        export.set_path("reports/");
        assert_eq!(export.out_path(), PathBuf::from("reports/").join("IBM-Badges.csv"));
    }
}
