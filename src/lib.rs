//! Gazette: an asynchronous news listing scraper and preprocessor
//!
//! This crate turns one seed listing URL into a collection of extracted
//! article documents. It discovers article entries on the listing page,
//! fetches every article body concurrently, strips template noise from the
//! HTML, and optionally normalizes the resulting text (case folding,
//! special-character stripping, stopword removal).

pub mod config;
pub mod crawler;
pub mod document;
pub mod normalize;

use thiserror::Error;

/// Main error type for Gazette operations
#[derive(Debug, Error)]
pub enum GazetteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        source: crawler::FetchError,
    },

    #[error("Cannot parse listing page {url}: {message}")]
    ListingParse { url: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Gazette operations
pub type Result<T> = std::result::Result<T, GazetteError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Orchestrator};
pub use document::{ArticleStub, Document, DocumentCollection, DocumentMetadata};
pub use normalize::{normalize, NormalizeOptions};
