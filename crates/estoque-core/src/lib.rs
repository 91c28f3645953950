//! # estoque-core: Pure Logic for the Stock Client
//!
//! Everything the client decides on its own, with zero I/O: what a product or
//! a movement looks like, which form inputs are acceptable, and in which order
//! products are shown.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal (apps/terminal)                     │   │
//! │  │    Login ──► Home ──► Produtos ──► Estoque                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ estoque-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │ collation │  │   form    │  │   │
//! │  │   │  Product  │  │  login    │  │  pt-BR    │  │  editor   │  │   │
//! │  │   │  Movement │  │  product  │  │  sort     │  │  draft    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 estoque-api (HTTP client)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Product, Movement, ...)
//! - [`validation`] - Form validation, run before any request is sent
//! - [`collation`] - Accent/case-insensitive name ordering
//! - [`form`] - Product editor and movement draft state machines
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use estoque_core::form::ProductForm;
//! use estoque_core::validation::validate_product_form;
//!
//! let form = ProductForm::new(" Caneta ", "10", "5");
//! let payload = validate_product_form(&form).unwrap();
//!
//! assert_eq!(payload.nome, "Caneta");
//! assert_eq!(payload.quantidade, 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collation;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of characters (after trimming) a search term must have.
pub const MIN_SEARCH_CHARS: usize = 2;
