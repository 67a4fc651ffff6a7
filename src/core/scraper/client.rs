//! GeoScraper HTTP client
//!
//! Single-call dispatch for a translated request: one POST with the token
//! header attached, no retries, no local caching, no rate limiting. The
//! `useCached` payload flag is an instruction to the remote API, not a local
//! cache.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::GeoScraperConfig;
use super::credentials::Credentials;
use super::request::RequestSpec;
use crate::core::types::records::ApiResponse;
use crate::utils::error::ScrapeError;

/// Authentication header carried on every request
pub const TOKEN_HEADER: &str = "X-Berserker-Token";

/// A failed dispatch: either the transport broke or the API answered non-2xx
#[derive(Debug, Clone, Error)]
pub enum DispatchFailure {
    /// Network-level failure, including unreadable or unparseable bodies
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-2xx response, raw body preserved for classification
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
}

/// Client for the GeoScraper API
#[derive(Debug, Clone)]
pub struct GeoScraperClient {
    config: GeoScraperConfig,
    http_client: Client,
}

impl GeoScraperClient {
    /// Create a client from a validated configuration
    pub fn new(config: GeoScraperConfig) -> Result<Self, ScrapeError> {
        config.validate()?;

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| ScrapeError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &GeoScraperConfig {
        &self.config
    }

    /// Perform the single network call described by `spec`.
    ///
    /// Returns the parsed body on 2xx, otherwise a `DispatchFailure` carrying
    /// the status and raw body for the classifier.
    pub async fn dispatch(
        &self,
        spec: &RequestSpec,
        credentials: &Credentials,
    ) -> Result<ApiResponse, DispatchFailure> {
        debug!(endpoint = %spec.endpoint, "dispatching request");

        let response = self
            .http_client
            .post(spec.endpoint.clone())
            .header(TOKEN_HEADER, credentials.token())
            .json(&spec.payload)
            .send()
            .await
            .map_err(|e| DispatchFailure::Network {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DispatchFailure::Network {
                message: format!("Failed to read response body: {e}"),
            })?;

        if !(200..300).contains(&status) {
            return Err(DispatchFailure::Http { status, body });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| DispatchFailure::Network {
                message: format!("Failed to parse response JSON: {e}"),
            })?;

        Ok(ApiResponse::from(value))
    }

    /// Verify a token against the API's test endpoint.
    ///
    /// The endpoint expects the token both as `X-Berserker-Token` and as a
    /// bearer `Authorization` header.
    pub async fn verify_token(&self, credentials: &Credentials) -> Result<(), ScrapeError> {
        let url = self.config.endpoint("/test-api-key")?;
        debug!(%url, "verifying API token");

        let response = self
            .http_client
            .get(url)
            .header(TOKEN_HEADER, credentials.token())
            .bearer_auth(credentials.token())
            .send()
            .await
            .map_err(|e| ScrapeError::Credentials(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ScrapeError::Credentials(format!(
                "HTTP {}",
                response.status().as_u16()
            )))
        }
    }
}
