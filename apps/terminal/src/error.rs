//! # App Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal App                       │
//! │                                                                         │
//! │  Command (e.g. create_product)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Validation failed? ─── ValidationError ──────────┐                    │
//! │       │                  (no request sent)        │                    │
//! │       ▼                                           ▼                    │
//! │  Request failed? ────── ClientError + fallback ── AppError ──► queue   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Success                                                                │
//! │                                                                         │
//! │  The backend's `error` text wins; otherwise the action's fallback.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use estoque_api::ClientError;
use estoque_core::ValidationError;
use thiserror::Error;
use tracing::warn;

/// Fallback messages shown when the backend gives no `error` text.
pub mod fallback {
    pub const LOGIN: &str = "Falha no login";
    pub const LOAD_PRODUCTS: &str = "Erro ao carregar produtos";
    pub const CREATE_PRODUCT: &str = "Erro ao criar produto";
    pub const SAVE_PRODUCT: &str = "Erro ao salvar produto";
    pub const DELETE_PRODUCT: &str = "Erro ao excluir produto";
    pub const REGISTER_MOVEMENT: &str = "Erro ao registrar movimentação";
}

/// Error returned from app commands.
///
/// Shown once through the notification queue and then forgotten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable kind, used for the notification severity
    pub code: ErrorCode,

    /// Text shown to the operator
    pub message: String,
}

/// Error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rejected before any request was sent
    Validation,

    /// The backend answered with a non-2xx status or an unreadable body
    Server,

    /// The backend could not be reached in time
    Network,

    /// The command referred to something not on screen
    NotFound,
}

pub type CommandResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// A product id the operator typed is not in the current list.
    pub fn unknown_product(id: i64) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("Produto {id} não está na lista."),
        )
    }

    /// Converts a failed request, preferring the backend's own message.
    pub fn from_client(err: ClientError, fallback: &str) -> Self {
        warn!(error = %err, fallback, "Request failed");

        let code = match err {
            ClientError::Timeout | ClientError::Network(_) => ErrorCode::Network,
            _ => ErrorCode::Server,
        };

        let message = err
            .server_message()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string();

        AppError::new(code, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::Validation, err.to_string())
    }
}

/// Failures that stop the program before or outside the shell loop.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] crate::state::ConfigError),

    #[error("cannot create HTTP client: {0}")]
    Client(#[from] ClientError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
