//! Listing page link discovery
//!
//! This module enumerates article entries on the seed listing page and
//! turns each one into an [`ArticleStub`]. The structural marker
//! (`div.views-row`) is tied to the target site's template, brittle by
//! design: if the template changes, discovery fails loudly rather than
//! returning garbage.

use crate::document::ArticleStub;
use chrono::Utc;
use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

/// CSS selector matching one article entry on the listing page
const ENTRY_SELECTOR: &str = "div.views-row";

/// Errors from the discovery pass.
///
/// Title and link are load-bearing for the rest of the pipeline, so an
/// entry missing either one fails the whole pass.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("Listing entry {index} has no heading element")]
    MissingTitle { index: usize },

    #[error("Listing entry {index} has no anchor with an href")]
    MissingLink { index: usize },

    #[error("Listing entry {index} has an unresolvable link {href}: {source}")]
    BadLink {
        index: usize,
        href: String,
        source: url::ParseError,
    },
}

/// Discovers article stubs on a listing page.
///
/// For each `div.views-row` entry, in page order:
/// - title: text of its `<h3>` heading;
/// - link: href of its first `<a>`, resolved against `base_url`;
/// - date: the `datetime` attribute of its `<time>` element if present,
///   otherwise today's ISO date at crawl time.
///
/// Returns an empty vector for a page with no entries; that is the
/// caller's "no articles found" case, not an error.
pub fn discover_articles(
    listing_html: &str,
    base_url: &Url,
) -> Result<Vec<ArticleStub>, DiscoverError> {
    let document = Html::parse_document(listing_html);
    let entry_selector = Selector::parse(ENTRY_SELECTOR).unwrap();
    let heading_selector = Selector::parse("h3").unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();
    let time_selector = Selector::parse("time").unwrap();

    let fallback_date = Utc::now().date_naive().to_string();
    let mut stubs = Vec::new();

    for (index, entry) in document.select(&entry_selector).enumerate() {
        let title = entry
            .select(&heading_selector)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .ok_or(DiscoverError::MissingTitle { index })?;

        let href = entry
            .select(&anchor_selector)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .ok_or(DiscoverError::MissingLink { index })?;

        let absolute = base_url.join(href).map_err(|e| DiscoverError::BadLink {
            index,
            href: href.to_string(),
            source: e,
        })?;

        let published_at = entry
            .select(&time_selector)
            .next()
            .and_then(|time| time.value().attr("datetime"))
            .map(str::to_string)
            .unwrap_or_else(|| fallback_date.clone());

        stubs.push(ArticleStub {
            title,
            url: absolute.to_string(),
            published_at,
            source: base_url.to_string(),
        });
    }

    Ok(stubs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://news.example.com/latest").unwrap()
    }

    fn entry(title: &str, href: &str, datetime: Option<&str>) -> String {
        let time = datetime
            .map(|d| format!(r#"<time datetime="{}">{}</time>"#, d, d))
            .unwrap_or_default();
        format!(
            r#"<div class="views-row"><h3>{}</h3><a href="{}">read</a>{}</div>"#,
            title, href, time
        )
    }

    #[test]
    fn test_discovers_entries_in_page_order() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            entry("First", "/news/1", Some("2024-05-01")),
            entry("Second", "/news/2", Some("2024-05-02")),
            entry("Third", "/news/3", None),
        );

        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs.len(), 3);
        assert_eq!(stubs[0].title, "First");
        assert_eq!(stubs[1].title, "Second");
        assert_eq!(stubs[2].title, "Third");
    }

    #[test]
    fn test_resolves_relative_links() {
        let html = entry("Story", "/news/123", None);
        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs[0].url, "https://news.example.com/news/123");
    }

    #[test]
    fn test_keeps_absolute_links() {
        let html = entry("Story", "https://other.example.org/a", None);
        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs[0].url, "https://other.example.org/a");
    }

    #[test]
    fn test_date_from_time_element() {
        let html = entry("Story", "/news/1", Some("2024-05-01"));
        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs[0].published_at, "2024-05-01");
    }

    #[test]
    fn test_date_fallback_is_today() {
        let html = entry("Story", "/news/1", None);
        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs[0].published_at, Utc::now().date_naive().to_string());
    }

    #[test]
    fn test_source_is_listing_url() {
        let html = entry("Story", "/news/1", None);
        let stubs = discover_articles(&html, &base()).unwrap();
        assert_eq!(stubs[0].source, "https://news.example.com/latest");
    }

    #[test]
    fn test_missing_heading_fails_whole_pass() {
        let html = format!(
            "{}{}",
            entry("Fine", "/news/1", None),
            r#"<div class="views-row"><a href="/news/2">no heading</a></div>"#,
        );
        let result = discover_articles(&html, &base());
        assert!(matches!(result, Err(DiscoverError::MissingTitle { index: 1 })));
    }

    #[test]
    fn test_missing_anchor_fails_whole_pass() {
        let html = r#"<div class="views-row"><h3>No link</h3></div>"#;
        let result = discover_articles(html, &base());
        assert!(matches!(result, Err(DiscoverError::MissingLink { index: 0 })));
    }

    #[test]
    fn test_no_entries_is_empty_not_error() {
        let html = "<html><body><p>nothing here</p></body></html>";
        let stubs = discover_articles(html, &base()).unwrap();
        assert!(stubs.is_empty());
    }

    #[test]
    fn test_title_whitespace_trimmed() {
        let html = r##"<div class="views-row"><h3>
            Spaced Out Title
        </h3><a href="/news/9">read</a></div>"##;
        let stubs = discover_articles(html, &base()).unwrap();
        assert_eq!(stubs[0].title, "Spaced Out Title");
    }
}
