// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod specs;

pub mod csv;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;
