//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl, including:
//! - Building an HTTP client with a browser-like user agent
//! - GET requests to fetch page bodies
//! - Error classification for the orchestrator's failure policy
//!
//! One client is built per crawl invocation and its connection pool is
//! shared by every fetch within that crawl.

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single fetch operation
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Builds the HTTP client shared across one crawl invocation
///
/// The user agent is browser-like to reduce trivial bot blocking; the
/// per-request timeout keeps a single stalled article from hanging the
/// whole batch join.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the full decoded response body.
///
/// The body is returned regardless of HTTP status: status inspection is
/// deliberately left to the caller's resilience policy, so a 404 page body
/// flows into extraction like any other document. Only network-level
/// failures (connect errors, timeouts, body read errors) surface as
/// [`FetchError`].
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}
