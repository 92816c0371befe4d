//! HTTP fetcher implementation
//!
//! One shared client, one GET per operation. Responses are read with a
//! hard byte cap so a runaway page cannot exhaust memory, and decoded
//! lossily; terminal rendering tolerates replacement characters better
//! than a failed fetch.

use crate::config::FetchConfig;
use crate::MatchaError;
use reqwest::Client;
use std::time::Duration;

/// A fetched page, body capped and decoded
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Body content, truncated to the configured byte cap
    pub body: String,
}

/// Builds the HTTP client used for the whole session
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, reading at most `max_bytes` of the response body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `max_bytes` - Byte cap on the body; the remainder is discarded
///
/// # Returns
///
/// * `Ok(FetchedPage)` - The response arrived; inspect `status` yourself
/// * `Err(MatchaError)` - Timeout or transport failure
pub async fn fetch_page(
    client: &Client,
    url: &str,
    max_bytes: usize,
) -> Result<FetchedPage, MatchaError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|source| classify(url, source))?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();

    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(|source| classify(url, source))? {
        if body.len() + chunk.len() > max_bytes {
            body.extend_from_slice(&chunk[..max_bytes - body.len()]);
            tracing::debug!("truncated body of {} at {} bytes", url, max_bytes);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    Ok(FetchedPage {
        final_url,
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn classify(url: &str, source: reqwest::Error) -> MatchaError {
    if source.is_timeout() {
        MatchaError::Timeout {
            url: url.to_string(),
        }
    } else {
        MatchaError::Http {
            url: url.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = FetchConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_client_with_custom_agent() {
        let config = FetchConfig {
            user_agent: "custom/9.9".to_string(),
            ..FetchConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }

    // Fetch behavior is exercised against a local server in the
    // integration tests (tests/browse_tests.rs).
}
