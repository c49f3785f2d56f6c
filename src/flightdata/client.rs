//! HTTP client for the third-party flight-arrivals API.
//!
//! The endpoint returns a JSON document with no contractual shape, so the
//! client deliberately deserializes into `serde_json::Value` and leaves all
//! interpretation to the shape prober and normalizer.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default timeout for flight API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from fetching the raw flight document.
#[derive(Debug, thiserror::Error)]
pub enum FlightApiError {
    #[error("flight API endpoint is not configured (set FLIGHT_API_URL)")]
    NotConfigured,
    #[error("flight API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Source of raw flight documents.
///
/// The sync orchestrator depends on this trait rather than on the concrete
/// HTTP client so tests can substitute canned documents.
#[async_trait]
pub trait FlightDataSource: Send + Sync {
    /// Fetch one raw document. No retry; callers surface failures to the
    /// operator and let them re-trigger the sync.
    async fn fetch_document(&self) -> Result<Value, FlightApiError>;
}

/// reqwest-backed flight API client.
#[derive(Debug)]
pub struct FlightApiClient {
    http_client: Client,
    endpoint: String,
}

impl FlightApiClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FlightApiError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FlightApiError> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(FlightApiError::NotConfigured);
        }
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Endpoint this client was configured with.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FlightDataSource for FlightApiClient {
    async fn fetch_document(&self) -> Result<Value, FlightApiError> {
        log::debug!("fetching flight arrivals from {}", self.endpoint);
        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let document = response.json::<Value>().await?;
        Ok(document)
    }
}
