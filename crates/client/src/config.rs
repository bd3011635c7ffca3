//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAZZURA_BACKEND_URL` - Base URL of the backend API (default: <http://localhost:8000>)

use thiserror::Error;
use url::Url;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "MAZZURA_BACKEND_URL";

/// Backend used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid backend URL {0}: {1}")]
    InvalidUrl(String, String),
}

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`
    base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured URL is not an absolute
    /// http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match get_optional_env(BACKEND_URL_VAR) {
            Some(value) => Self::new(&value)
                .map_err(|e| ConfigError::InvalidEnvVar(BACKEND_URL_VAR.to_string(), e.to_string())),
            None => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    /// Build a configuration for an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` does not parse or is
    /// not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(
                base_url.to_string(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// The base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// Get an optional, non-empty environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://api.mazzura.app/").unwrap();
        assert_eq!(config.base_url(), "http://api.mazzura.app");
    }

    #[test]
    fn test_path_prefix_kept() {
        let config = ClientConfig::new("https://example.com/mazzura//").unwrap();
        assert_eq!(config.base_url(), "https://example.com/mazzura");
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            ClientConfig::new("localhost:8000/api"),
            Err(ConfigError::InvalidUrl(_, _))
        ));
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_default_is_localhost() {
        assert_eq!(ClientConfig::default().base_url(), DEFAULT_BACKEND_URL);
    }
}
