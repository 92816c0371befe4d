use serde::Deserialize;
use url::Url;

/// Main configuration structure for matcha
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub search: SearchConfig,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of body bytes read when fetching a document
    #[serde(rename = "max-page-bytes")]
    pub max_page_bytes: usize,

    /// Maximum number of body bytes read when fetching a results page
    #[serde(rename = "max-search-bytes")]
    pub max_search_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "matcha/1.0 (+https://example.local/matcha)".to_string(),
            timeout_secs: 15,
            max_page_bytes: 5 * 1024 * 1024,
            max_search_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Search engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query-string prefix the escaped search terms are appended to
    #[serde(rename = "engine-url")]
    pub engine_url: String,

    /// Maximum number of parsed search results kept in memory
    #[serde(rename = "max-results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: "https://duckduckgo.com/html/?q=".to_string(),
            max_results: crate::extract::RESULT_CAP,
        }
    }
}

impl SearchConfig {
    /// Returns the engine's origin (scheme + host + port), used to
    /// absolutize relative result links
    ///
    /// Returns None when the engine URL does not parse or has no real
    /// origin; validation rejects such configs at load time.
    pub fn origin(&self) -> Option<String> {
        let url = Url::parse(&self.engine_url).ok()?;
        match url.origin() {
            origin @ url::Origin::Tuple(..) => Some(origin.ascii_serialization()),
            url::Origin::Opaque(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = Config::default();
        assert_eq!(config.fetch.timeout_secs, 15);
        assert_eq!(config.fetch.max_page_bytes, 5 * 1024 * 1024);
        assert_eq!(config.fetch.max_search_bytes, 2 * 1024 * 1024);
        assert_eq!(config.search.engine_url, "https://duckduckgo.com/html/?q=");
        assert_eq!(config.search.max_results, 200);
    }

    #[test]
    fn test_default_origin() {
        let config = SearchConfig::default();
        assert_eq!(config.origin().unwrap(), "https://duckduckgo.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let config = SearchConfig {
            engine_url: "http://localhost:8080/html/?q=".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(config.origin().unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_origin_of_unparseable_engine() {
        let config = SearchConfig {
            engine_url: "not a url".to_string(),
            ..SearchConfig::default()
        };
        assert!(config.origin().is_none());
    }
}
