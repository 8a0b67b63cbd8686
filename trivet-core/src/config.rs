//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default backend the screens talk to.
pub const DEFAULT_BASE_URL: &str = "https://recipe-be-ekcs.onrender.com";

/// Default abort window applied to every request.
pub const DEFAULT_ABORT_WINDOW_MS: u64 = 1000;

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the recipe backend.
    pub base_url: Url,
    /// Wall-clock budget per request; a request still in flight when the
    /// window closes is aborted and its eventual result ignored.
    pub abort_window: Duration,
}

impl ApiConfig {
    /// Build a configuration from an explicit base URL and abort window.
    pub fn new(base_url: &str, abort_window: Duration) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            base_url,
            abort_window,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `TRIVET_API_URL`: backend base URL (default: the public backend)
    /// - `TRIVET_ABORT_WINDOW_MS`: abort window in ms (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("TRIVET_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let abort_window_ms = env::var("TRIVET_ABORT_WINDOW_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ABORT_WINDOW_MS);

        Self::new(&base_url, Duration::from_millis(abort_window_ms))
    }

    /// Replace the base URL, keeping the abort window.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            abort_window: Duration::from_millis(DEFAULT_ABORT_WINDOW_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url.as_str(), "https://recipe-be-ekcs.onrender.com/");
        assert_eq!(config.abort_window, Duration::from_millis(1000));
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(ApiConfig::new("not a url", Duration::from_millis(1000)).is_err());
    }
}
