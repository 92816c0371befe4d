//! Matcha: a green-on-black terminal browser
//!
//! This crate turns hypertext documents into clean, paginated plain text for
//! a line-oriented display: a DOM-to-text extractor, a search-result miner,
//! a URL sanitizer, and a fixed-window pagination engine, wrapped in an
//! omnibar session loop.

pub mod browser;
pub mod config;
pub mod extract;
pub mod pager;
pub mod urls;

use thiserror::Error;

/// Main error type for matcha operations
#[derive(Debug, Error)]
pub enum MatchaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{0}")]
    Pager(#[from] pager::PagerError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

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

/// Result type alias for matcha operations
pub type Result<T> = std::result::Result<T, MatchaError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_results, extract_text, extract_title, text_from_html, SearchResult};
pub use pager::{PageView, PagerError, ResultPager, PAGE_SIZE};
pub use urls::sanitize_url;
