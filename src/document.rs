//! Document data model
//!
//! This module defines the types that flow through the pipeline:
//! - `ArticleStub`: a discovered listing entry before its body is fetched
//! - `Document`: one article with (eventually) extracted content
//! - `DocumentCollection`: the ordered result of a whole crawl
//!
//! The JSON shape of `DocumentCollection` is the crate's export format and
//! is identical for raw and normalized output, differing only in `content`.

use crate::normalize::{normalize, NormalizeOptions};
use serde::{Deserialize, Serialize};

/// A discovered article entry from the listing page.
///
/// Stubs are created during link discovery and never mutated afterward.
/// Their order is the order of appearance on the listing page, and that
/// order is preserved all the way into the final collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStub {
    /// Text of the entry's heading element
    pub title: String,

    /// Absolute article URL, resolved against the listing URL
    pub url: String,

    /// ISO date from the entry's time element, or the crawl date
    pub published_at: String,

    /// The listing page this stub was discovered on
    pub source: String,
}

/// Per-document metadata carried into the JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub date: String,
    pub source: String,
}

/// One article document.
///
/// `content` starts as `None` and is filled exactly once when the article's
/// fetch+extract task completes; a failed fetch fills the slot with a
/// sentinel string instead of dropping the entry. The normalizer may later
/// replace `content` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub content: Option<String>,
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Creates a content-less document from a discovered stub
    pub fn from_stub(stub: &ArticleStub) -> Self {
        Self {
            title: stub.title.clone(),
            url: stub.url.clone(),
            content: None,
            metadata: DocumentMetadata {
                date: stub.published_at.clone(),
                source: stub.source.clone(),
            },
        }
    }
}

/// The ordered result of one crawl.
///
/// Index `i` always corresponds to the i-th discovered stub; the collection
/// holds exactly one document per listing entry, failures included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCollection {
    pub documents: Vec<Document>,
}

impl DocumentCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Applies the normalizer to every non-null content, in place
    pub fn normalize_contents(&mut self, options: &NormalizeOptions) {
        for document in &mut self.documents {
            if let Some(content) = &document.content {
                document.content = Some(normalize(content, options));
            }
        }
    }

    /// Serializes the collection to pretty-printed JSON in the export shape
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
