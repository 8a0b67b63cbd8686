//! HTTP transport trait and implementations.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

/// Trait for HTTP transports, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and parse the response body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;

    /// POST a JSON body to a URL and parse the response body as JSON.
    async fn post_json(&self, url: &str, body: Value) -> Result<Value, FetchError>;
}

/// Configuration for NetworkClient.
#[derive(Clone)]
pub struct NetworkClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for NetworkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            // Transport-level safety net; the per-request abort window is
            // applied by the caller (see http::deadline).
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (compatible; Trivet/1.0)".to_string(),
        }
    }

    /// Set the transport-level timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the NetworkClient.
    pub fn build(self) -> Result<NetworkClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(NetworkClient { inner })
    }
}

/// Production HTTP transport over a shared reqwest client.
pub struct NetworkClient {
    /// Shared reqwest client for connection pooling.
    inner: reqwest::Client,
}

impl NetworkClient {
    /// Create a new NetworkClient with default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        NetworkClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> NetworkClientBuilder {
        NetworkClientBuilder::new()
    }

    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        // Non-OK statuses are failures, same as transport errors.
        let response = response.error_for_status()?;
        tracing::debug!(url, status = %status, "network: response received");
        Ok(response.json().await?)
    }
}

#[async_trait]
impl HttpClient for NetworkClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url, "network: GET");
        let response = self.inner.get(parsed).send().await?;
        Self::read_json(url, response).await
    }

    async fn post_json(&self, url: &str, body: Value) -> Result<Value, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url, "network: POST");
        let response = self.inner.post(parsed).json(&body).send().await?;
        Self::read_json(url, response).await
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Json(Value),
    Error(String),
    /// Never resolves; stands in for a stalled network when exercising the
    /// abort window.
    Stall,
}

/// Mock HTTP transport for testing.
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a JSON response for a URL.
    pub fn with_json(self, url: &str, json: Value) -> Self {
        self.with_response(url, MockResponse::Json(json))
    }

    /// Add an error response for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// Make a URL stall forever.
    pub fn with_stall(self, url: &str) -> Self {
        self.with_response(url, MockResponse::Stall)
    }

    async fn respond(&self, url: &str) -> Result<Value, FetchError> {
        match self.responses.get(url) {
            Some(MockResponse::Json(json)) => Ok(json.clone()),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            Some(MockResponse::Stall) => std::future::pending().await,
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.respond(url).await
    }

    async fn post_json(&self, url: &str, _body: Value) -> Result<Value, FetchError> {
        self.respond(url).await
    }
}
