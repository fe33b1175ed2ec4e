//! Crawler module for listing discovery and article fetching
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching over a shared connection pool
//! - Listing page link discovery
//! - Paragraph-level content extraction with noise filtering
//! - Fan-out/fan-in crawl orchestration

mod discover;
mod extractor;
mod fetcher;
mod orchestrator;

pub use discover::{discover_articles, DiscoverError};
pub use extractor::{extract_content, NoiseFilter, NO_CONTENT_SENTINEL};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use orchestrator::{Orchestrator, UNAVAILABLE_SENTINEL};

use crate::config::Config;
use crate::document::DocumentCollection;
use crate::Result;

/// Crawls one seed listing URL into a document collection
///
/// This is the main entry point for a crawl. It builds the shared HTTP
/// client, discovers the listing's article entries, fetches and extracts
/// every article concurrently, and returns the documents in discovery
/// order.
///
/// # Arguments
///
/// * `seed_url` - Absolute URL of the listing page
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(DocumentCollection)` - One document per discovered entry
/// * `Err(GazetteError)` - Invalid seed, or listing fetch/parse failure
pub async fn crawl(seed_url: &str, config: &Config) -> Result<DocumentCollection> {
    let orchestrator = Orchestrator::new(config)?;
    orchestrator.crawl(seed_url).await
}
