//! # estoque-api: REST Client for the Inventory Backend
//!
//! The only crate that talks to the network. It wraps one configured
//! `reqwest::Client` (base address + request timeout) and exposes one method
//! per backend endpoint.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Data Flow                                │
//! │                                                                         │
//! │  Terminal command (create_product)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   estoque-api (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   ApiClient   │    │   Endpoints   │    │  Inventory-  │  │   │
//! │  │   │  (client.rs)  │    │ (endpoint/)   │    │  Backend     │  │   │
//! │  │   │               │    │               │    │  (trait)     │  │   │
//! │  │   │ reqwest       │◄───│ AuthEndpoint  │◄───│              │  │   │
//! │  │   │ base_url      │    │ Product...    │    │ what the app │  │   │
//! │  │   │ timeout       │    │ Movement...   │    │ depends on   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Backend REST API (not in this repo)                │   │
//! │  │   /auth/login   /produtos   /produtos/{id}   /movimentacoes     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use estoque_api::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::default())?;
//! let products = client.products().list(Some("caneta")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod client;
pub mod endpoint;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::InventoryBackend;
pub use client::{ApiClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{ClientError, ClientResult};

pub use endpoint::auth::AuthEndpoint;
pub use endpoint::movement::MovementEndpoint;
pub use endpoint::product::ProductEndpoint;
