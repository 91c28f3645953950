//! # Endpoint Module
//!
//! One struct per backend resource, each borrowing the shared [`ApiClient`].
//!
//! ## Endpoint Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Endpoint Pattern                                     │
//! │                                                                         │
//! │  Terminal command                                                      │
//! │       │                                                                 │
//! │       │  client.products().list(Some("caneta"))                        │
//! │       ▼                                                                 │
//! │  ProductEndpoint                                                       │
//! │  ├── list(&self, search)          GET    /produtos[?q=]                │
//! │  ├── create(&self, payload)       POST   /produtos                     │
//! │  ├── update(&self, id, payload)   PUT    /produtos/{id}                │
//! │  └── delete(&self, id)            DELETE /produtos/{id}                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiClient::send (status check, error message extraction)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Endpoints
//!
//! - [`AuthEndpoint`](auth::AuthEndpoint) - Login
//! - [`ProductEndpoint`](product::ProductEndpoint) - Product CRUD and search
//! - [`MovementEndpoint`](movement::MovementEndpoint) - Stock movements
//!
//! [`ApiClient`]: crate::ApiClient

pub mod auth;
pub mod movement;
pub mod product;
