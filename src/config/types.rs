use serde::Deserialize;

/// Browser-like identification sent with every request, to reduce trivial
/// bot blocking on the target site
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Main configuration structure for Gazette
///
/// Every field has a default, so the crate runs without a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds; a stalled article fetch fails after
    /// this long instead of hanging the batch join
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Content extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Paragraphs with at most this many characters are discarded
    #[serde(rename = "min-fragment-chars", default = "default_min_fragment_chars")]
    pub min_fragment_chars: usize,

    /// Paragraphs containing any of these phrases are discarded as
    /// template noise
    #[serde(rename = "noise-phrases", default = "default_noise_phrases")]
    pub noise_phrases: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_fragment_chars: default_min_fragment_chars(),
            noise_phrases: default_noise_phrases(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_min_fragment_chars() -> usize {
    20
}

fn default_noise_phrases() -> Vec<String> {
    vec![
        "HTTPS".to_string(),
        "gov".to_string(),
        "Official websites use".to_string(),
        "Learn more".to_string(),
    ]
}
