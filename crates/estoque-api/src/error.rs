//! # Client Error Types
//!
//! Everything that can go wrong between sending a request and decoding its
//! response.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / non-2xx status                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ClientError (this module) ← status + backend `error` message          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (terminal) ← backend message, or the action's fallback       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Notification shown once                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// HTTP client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the `error` field of the JSON body, when there was one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection refused, DNS failure, reset, ...
    #[error("Connection failed: {0}")]
    Network(String),

    /// A 2xx response whose body is not what the endpoint returns.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// The client could not be built (bad base URL, TLS backend, ...).
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Creates a Server error.
    pub fn server(status: u16, message: Option<String>) -> Self {
        ClientError::Server { status, message }
    }

    /// The backend's own explanation, if it sent one.
    ///
    /// This is what the operator sees; every other variant falls back to the
    /// action's generic message.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Convert reqwest errors to ClientError.
///
/// ## Error Mapping
/// ```text
/// is_timeout() → ClientError::Timeout
/// is_decode()  → ClientError::Decode
/// is_builder() → ClientError::InvalidConfig
/// Other        → ClientError::Network
/// ```
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::InvalidConfig(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
