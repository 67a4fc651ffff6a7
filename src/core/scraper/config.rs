//! GeoScraper Configuration

use std::env;

use url::Url;

use crate::utils::error::ScrapeError;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.geoscraper.net";

/// Configuration for the GeoScraper client
#[derive(Debug, Clone)]
pub struct GeoScraperConfig {
    /// Base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
}

impl Default for GeoScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 120,
            connect_timeout: 10,
        }
    }
}

impl GeoScraperConfig {
    /// Create a configuration with the default endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from environment variables.
    ///
    /// Recognized: `GEOSCRAPER_BASE_URL`, `GEOSCRAPER_TIMEOUT`,
    /// `GEOSCRAPER_CONNECT_TIMEOUT`. Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("GEOSCRAPER_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = env::var("GEOSCRAPER_TIMEOUT") {
            config.request_timeout = timeout.parse().unwrap_or(config.request_timeout);
        }

        if let Ok(timeout) = env::var("GEOSCRAPER_CONNECT_TIMEOUT") {
            config.connect_timeout = timeout.parse().unwrap_or(config.connect_timeout);
        }

        config
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ScrapeError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ScrapeError::Config(format!("Invalid endpoint {raw}: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.base_url.is_empty() {
            return Err(ScrapeError::Config("Base URL cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ScrapeError::Config(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(ScrapeError::Config(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.connect_timeout > self.request_timeout {
            return Err(ScrapeError::Config(
                "Connect timeout cannot be greater than request timeout".to_string(),
            ));
        }

        Ok(())
    }
}
