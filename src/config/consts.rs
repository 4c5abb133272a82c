// src/config/consts.rs

// Index
pub const INDEX_URL_TEMPLATE: &str = "https://www.youracclaim.com/organizations/ibm/badges?page=:page";
pub const PAGE_PLACEHOLDER: &str = ":page";
pub const MAX_PAGE: u32 = 46;
pub const ALLOWED_DOMAIN: &str = "www.youracclaim.com";
pub const BADGE_PATH_PREFIX: &str = "/org/ibm/badge/";

// Detail page selectors
pub const ATTR_LIST_CLASS: &str =
    "cr-badges-template-attributes cr-badges-template-attributes--normal hide-mobile";
pub const ATTR_ITEM_SELECTOR: &str = "li.cr-badges-template-attributes__item";
pub const ATTR_LABEL_SELECTOR: &str = ".cr-badges-template-attributes__label";
pub const ATTR_VALUE_SELECTOR: &str = ".cr-badges-template-attributes__value";
pub const TAG_LIST_CLASS: &str = "cr-badges-badge-skills__skills";

// Net config
pub const USER_AGENT: &str = concat!("badge_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "IBM-Badges";
pub const NO_VALUE: &str = "N/A";
pub const HEADERS: [&str; 7] = [
    "Badge Title",
    "Badge Link",
    "Badge Type",
    "Badge Level",
    "Badge Time",
    "Badge Cost",
    "Badge Skills",
];
pub const ATTRIBUTE_COLUMNS: [&str; 4] = ["Type", "Level", "Time", "Cost"];

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
