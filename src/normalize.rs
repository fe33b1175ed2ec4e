//! Text normalization
//!
//! Applies order-sensitive transformations to extracted article text:
//! lowercasing, special-character stripping, and stopword removal. Each
//! step is independently switchable, but the order is fixed: the stripping
//! step assumes lowercasing has already run.

/// The closed stopword list used by the stopword-removal step
pub const STOPWORDS: [&str; 9] = ["the", "is", "in", "and", "to", "of", "a", "for", "it"];

/// Which normalization steps to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub lowercase: bool,
    pub strip_special: bool,
    pub strip_stopwords: bool,
}

impl NormalizeOptions {
    /// True if no step is enabled, in which case `normalize` is the identity
    pub fn is_noop(&self) -> bool {
        !self.lowercase && !self.strip_special && !self.strip_stopwords
    }
}

/// Normalizes a content string.
///
/// Steps run in a fixed order when enabled:
/// 1. lowercase the whole string;
/// 2. remove every character that is not a lowercase ASCII letter or
///    whitespace (note: with `lowercase` off this also strips uppercase
///    letters -- a documented edge case, kept deliberately);
/// 3. split on whitespace, drop tokens exactly matching [`STOPWORDS`],
///    rejoin with single spaces.
///
/// With all three steps enabled the result is a fixed point: running
/// `normalize` again with the same options returns the string unchanged.
pub fn normalize(content: &str, options: &NormalizeOptions) -> String {
    let mut text = if options.lowercase {
        content.to_lowercase()
    } else {
        content.to_string()
    };

    if options.strip_special {
        text.retain(|c| c.is_ascii_lowercase() || c.is_whitespace());
    }

    if options.strip_stopwords {
        text = text
            .split_whitespace()
            .filter(|token| !STOPWORDS.contains(token))
            .collect::<Vec<_>>()
            .join(" ");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: NormalizeOptions = NormalizeOptions {
        lowercase: true,
        strip_special: true,
        strip_stopwords: true,
    };

    #[test]
    fn test_all_flags_disabled_is_identity() {
        let input = "The  Cat,  IS \n Here!";
        let options = NormalizeOptions::default();
        assert!(options.is_noop());
        assert_eq!(normalize(input, &options), input);
    }

    #[test]
    fn test_full_normalization() {
        assert_eq!(normalize("The Cat IS Here", &ALL), "cat here");
    }

    #[test]
    fn test_lowercase_only() {
        let options = NormalizeOptions {
            lowercase: true,
            ..Default::default()
        };
        assert_eq!(normalize("The Cat", &options), "the cat");
    }

    #[test]
    fn test_strip_special_removes_punctuation_and_digits() {
        let options = NormalizeOptions {
            lowercase: true,
            strip_special: true,
            strip_stopwords: false,
        };
        assert_eq!(normalize("Agenda 2030: what's next?", &options), "agenda  whats next");
    }

    #[test]
    fn test_strip_special_without_lowercase_drops_uppercase() {
        // Stripping assumes lowercasing already ran; without it, uppercase
        // letters are removed too. Kept behavior, not a bug.
        let options = NormalizeOptions {
            lowercase: false,
            strip_special: true,
            strip_stopwords: false,
        };
        assert_eq!(normalize("The Cat IS here", &options), "he at  here");
    }

    #[test]
    fn test_stopwords_exact_match_only() {
        let options = NormalizeOptions {
            lowercase: false,
            strip_special: false,
            strip_stopwords: true,
        };
        // "these" and "its" are not in the closed list; "is" and "it" are
        assert_eq!(
            normalize("these is its it news", &options),
            "these its news"
        );
    }

    #[test]
    fn test_stopword_removal_collapses_whitespace() {
        let options = NormalizeOptions {
            lowercase: false,
            strip_special: false,
            strip_stopwords: true,
        };
        assert_eq!(normalize("cat   and \n dog", &options), "cat dog");
    }

    #[test]
    fn test_idempotent_with_all_flags() {
        let once = normalize("The Cat, IS 100% Here for it!", &ALL);
        let twice = normalize(&once, &ALL);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_all_content_is_stopwords() {
        assert_eq!(normalize("The IS of IT", &ALL), "");
    }
}
