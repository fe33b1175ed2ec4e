//! Crawl orchestration - the fan-out/fan-in pipeline core
//!
//! The orchestrator fetches the seed listing page, discovers article
//! stubs, launches one concurrent fetch+extract task per stub, and joins
//! on all of them before assembling the final collection. Slot `i` of the
//! result always belongs to stub `i`, regardless of task completion order,
//! and one article's failure never disturbs its siblings.

use crate::config::Config;
use crate::crawler::discover::discover_articles;
use crate::crawler::extractor::{extract_content, NoiseFilter};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::document::{Document, DocumentCollection};
use crate::{GazetteError, Result};
use reqwest::Client;
use tokio::task::JoinSet;
use url::Url;

/// Slot content for an article whose fetch failed
pub const UNAVAILABLE_SENTINEL: &str = "content unavailable";

/// Drives one listing crawl from seed URL to document collection.
///
/// The orchestrator owns the HTTP client (and with it the connection pool)
/// for the duration of a crawl call; it keeps no state between calls.
pub struct Orchestrator {
    client: Client,
    noise_filter: NoiseFilter,
}

impl Orchestrator {
    /// Creates an orchestrator from the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.fetch)?;
        let noise_filter = NoiseFilter::new(
            config.extractor.noise_phrases.clone(),
            config.extractor.min_fragment_chars,
        );

        Ok(Self {
            client,
            noise_filter,
        })
    }

    /// Crawls one listing page into a [`DocumentCollection`].
    ///
    /// # Failure policy
    ///
    /// - An empty or unparseable seed URL is rejected before any network
    ///   activity ([`GazetteError::InvalidSeed`]).
    /// - A listing-page fetch or parse failure blocks the whole pipeline
    ///   ([`GazetteError::Http`] / [`GazetteError::ListingParse`]).
    /// - A per-article fetch failure is contained at the fan-out boundary:
    ///   the slot gets [`UNAVAILABLE_SENTINEL`] and siblings proceed.
    /// - Zero discovered entries is a valid, empty result.
    pub async fn crawl(&self, seed_url: &str) -> Result<DocumentCollection> {
        let seed = validate_seed(seed_url)?;

        tracing::info!("Fetching listing page {}", seed);
        let listing_html =
            fetch_page(&self.client, seed.as_str())
                .await
                .map_err(|e| GazetteError::Http {
                    url: seed.to_string(),
                    source: e,
                })?;

        let stubs =
            discover_articles(&listing_html, &seed).map_err(|e| GazetteError::ListingParse {
                url: seed.to_string(),
                message: e.to_string(),
            })?;

        if stubs.is_empty() {
            tracing::warn!("No articles found on {}", seed);
            return Ok(DocumentCollection::new());
        }
        tracing::info!("Discovered {} articles", stubs.len());

        // Fan-out: one task per stub, no concurrency cap. Results are
        // filled by stub index so ordering is order-of-discovery no matter
        // which task finishes first.
        let mut tasks = JoinSet::new();
        for (index, stub) in stubs.iter().enumerate() {
            let client = self.client.clone();
            let filter = self.noise_filter.clone();
            let url = stub.url.clone();

            tasks.spawn(async move {
                let content = match fetch_page(&client, &url).await {
                    Ok(body) => extract_content(&body, &filter),
                    Err(e) => {
                        tracing::warn!("Fetch failed for {}: {}", url, e);
                        UNAVAILABLE_SENTINEL.to_string()
                    }
                };
                (index, content)
            });
        }

        // Fan-in: all-or-none barrier. A panicked task only loses its own
        // slot, which then falls back to the sentinel.
        let mut contents: Vec<Option<String>> = vec![None; stubs.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, content)) => contents[index] = Some(content),
                Err(e) => tracing::error!("Article task failed to join: {}", e),
            }
        }

        let documents = stubs
            .iter()
            .zip(contents)
            .map(|(stub, content)| {
                let mut document = Document::from_stub(stub);
                document.content =
                    Some(content.unwrap_or_else(|| UNAVAILABLE_SENTINEL.to_string()));
                document
            })
            .collect();

        Ok(DocumentCollection { documents })
    }
}

/// Validates the seed URL before any network activity
fn validate_seed(seed_url: &str) -> Result<Url> {
    let trimmed = seed_url.trim();
    if trimmed.is_empty() {
        return Err(GazetteError::InvalidSeed(
            "seed URL must not be empty".to_string(),
        ));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| GazetteError::InvalidSeed(format!("{}: {}", trimmed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(GazetteError::InvalidSeed(format!(
            "unsupported scheme {}",
            url.scheme()
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_seed_rejects_empty() {
        assert!(matches!(
            validate_seed(""),
            Err(GazetteError::InvalidSeed(_))
        ));
        assert!(matches!(
            validate_seed("   "),
            Err(GazetteError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_validate_seed_rejects_relative() {
        assert!(matches!(
            validate_seed("/news/latest"),
            Err(GazetteError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_validate_seed_rejects_non_http_scheme() {
        assert!(matches!(
            validate_seed("ftp://example.com/"),
            Err(GazetteError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_validate_seed_accepts_http_and_https() {
        assert!(validate_seed("http://example.com/news").is_ok());
        assert!(validate_seed("https://example.com/news").is_ok());
    }
}
