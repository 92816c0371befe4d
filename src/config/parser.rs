use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration file when a path is given, otherwise returns
/// the built-in defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

/// Validates a configuration, checking limits and the engine URL
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.fetch.max_page_bytes == 0 {
        return Err(ConfigError::Validation(
            "fetch.max-page-bytes must be greater than 0".to_string(),
        ));
    }

    if config.fetch.max_search_bytes == 0 {
        return Err(ConfigError::Validation(
            "fetch.max-search-bytes must be greater than 0".to_string(),
        ));
    }

    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetch.user-agent must not be empty".to_string(),
        ));
    }

    if config.search.max_results == 0 {
        return Err(ConfigError::Validation(
            "search.max-results must be greater than 0".to_string(),
        ));
    }

    let engine = Url::parse(&config.search.engine_url).map_err(|e| {
        ConfigError::Validation(format!(
            "search.engine-url is not a valid URL: {}",
            e
        ))
    })?;

    if engine.scheme() != "http" && engine.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "search.engine-url must be HTTP or HTTPS, got: {}",
            engine.scheme()
        )));
    }

    if config.search.origin().is_none() {
        return Err(ConfigError::Validation(
            "search.engine-url has no usable origin".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
user-agent = "test-browser/0.1"
timeout-secs = 5
max-page-bytes = 1024
max-search-bytes = 512

[search]
engine-url = "https://searx.local/search?q="
max-results = 50
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.user_agent, "test-browser/0.1");
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.max_page_bytes, 1024);
        assert_eq!(config.search.engine_url, "https://searx.local/search?q=");
        assert_eq!(config.search.max_results, 50);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config_content = r#"
[fetch]
timeout-secs = 30
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.max_page_bytes, 5 * 1024 * 1024);
        assert_eq!(config.search.max_results, 200);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config_content = r#"
[fetch]
timeout-secs = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_non_http_engine_rejected() {
        let config_content = r#"
[search]
engine-url = "ftp://example.com/?q="
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_or_default_without_path() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.search.max_results, 200);
    }
}
