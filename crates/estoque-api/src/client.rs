//! # HTTP Client Wrapper
//!
//! One `reqwest::Client`, configured once, shared by every endpoint.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Request Lifecycle                                  │
//! │                                                                         │
//! │  Endpoint method (e.g. products().create(&payload))                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::url(path) ← base_url + path                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::send(request) ← timeout applied by the client              │
//! │       │                                                                 │
//! │       ├── transport error ──► ClientError::{Timeout, Network}          │
//! │       │                                                                 │
//! │       ├── non-2xx ──► read `{"error": "..."}` ──► ClientError::Server  │
//! │       │                                                                 │
//! │       └── 2xx ──► Response handed back to the endpoint                 │
//! │                                                                         │
//! │  No retries, no backoff: the first failure is final.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::endpoint::auth::AuthEndpoint;
use crate::endpoint::movement::MovementEndpoint;
use crate::endpoint::product::ProductEndpoint;
use crate::error::{ClientError, ClientResult};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

// =============================================================================
// Configuration
// =============================================================================

/// Client configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use estoque_api::ClientConfig;
///
/// let config = ClientConfig::new("http://estoque.local:3000")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base address, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 8 seconds
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given base address.
    ///
    /// A trailing `/` is dropped so paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Client
// =============================================================================

/// The configured HTTP client.
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally.
///
/// ## Usage
/// ```rust,ignore
/// let client = ApiClient::new(ClientConfig::default())?;
///
/// let user = client.auth().login(&credentials).await?;
/// let products = client.products().list(None).await?;
/// let receipt = client.movements().register(&movement).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds the client.
    ///
    /// ## Errors
    /// `ClientError::InvalidConfig` if the base URL is not http(s) or the
    /// TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        debug!(base_url = %config.base_url, timeout_ms = config.timeout.as_millis() as u64, "API client ready");

        Ok(ApiClient {
            http,
            base_url: config.base_url,
        })
    }

    /// The backend base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Endpoint Accessors
    // =========================================================================

    /// `/auth/*` endpoints.
    pub fn auth(&self) -> AuthEndpoint<'_> {
        AuthEndpoint::new(self)
    }

    /// `/produtos` endpoints.
    pub fn products(&self) -> ProductEndpoint<'_> {
        ProductEndpoint::new(self)
    }

    /// `/movimentacoes` endpoints.
    pub fn movements(&self) -> MovementEndpoint<'_> {
        MovementEndpoint::new(self)
    }

    // =========================================================================
    // Plumbing for Endpoints
    // =========================================================================

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and turns any non-2xx status into `ClientError::Server`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // The backend puts its explanation in `{"error": "..."}`; anything
        // else (HTML error page, empty body) leaves the message empty.
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));

        debug!(status = status.as_u16(), message = ?message, "Backend returned an error");
        Err(ClientError::server(status.as_u16(), message))
    }

    /// Sends a request and decodes the JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// Sends a request and returns the body as loose JSON.
    ///
    /// An empty or non-JSON 2xx body becomes `Value::Null`.
    pub(crate) async fn send_value(&self, request: RequestBuilder) -> ClientResult<Value> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
