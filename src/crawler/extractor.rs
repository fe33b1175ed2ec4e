//! Article content extraction
//!
//! Given a fetched article page, this module selects paragraph-level text
//! nodes, drops template noise (boilerplate phrases, too-short fragments),
//! and joins what survives into a single content string.

use scraper::{Html, Selector};

/// Returned when no paragraph survives the noise filter, so downstream
/// consumers can tell "no content" apart from "fetch failed"
pub const NO_CONTENT_SENTINEL: &str = "No relevant content available";

/// Heuristic noise filter for paragraph fragments.
///
/// A fragment is noise if it contains any of the configured boilerplate
/// phrases or is at most `min_chars` characters long. Both rules are
/// site-specific heuristics, kept behind this type so they can be swapped
/// without touching the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    phrases: Vec<String>,
    min_chars: usize,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            phrases: vec![
                "HTTPS".to_string(),
                "gov".to_string(),
                "Official websites use".to_string(),
                "Learn more".to_string(),
            ],
            min_chars: 20,
        }
    }
}

impl NoiseFilter {
    pub fn new(phrases: Vec<String>, min_chars: usize) -> Self {
        Self { phrases, min_chars }
    }

    /// True if the fragment should be discarded
    pub fn is_noise(&self, text: &str) -> bool {
        if self.phrases.iter().any(|phrase| text.contains(phrase)) {
            return true;
        }
        text.chars().count() <= self.min_chars
    }
}

/// Extracts article content from an HTML document.
///
/// Selects all `<p>` elements in document order, trims each fragment,
/// discards the ones the filter flags as noise, and joins the survivors
/// with single spaces. Returns [`NO_CONTENT_SENTINEL`] (never an empty
/// string) when nothing survives.
pub fn extract_content(html: &str, filter: &NoiseFilter) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").unwrap();

    let fragments: Vec<String> = document
        .select(&paragraph_selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !filter.is_noise(text))
        .collect();

    if fragments.is_empty() {
        NO_CONTENT_SENTINEL.to_string()
    } else {
        fragments.join(" ")
    }
}
