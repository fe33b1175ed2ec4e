//! Configuration module for Gazette
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field defaults sensibly, so a config file is
//! only needed to retarget the noise filter or tune fetch timeouts.
//!
//! # Example
//!
//! ```no_run
//! use gazette::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gazette.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractorConfig, FetchConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::load_config;
