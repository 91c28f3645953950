//! # App Commands
//!
//! Every operation the views offer, as `async` methods on [`crate::App`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here
//! ├── auth.rs      ◄─── login, logout, navigate
//! ├── product.rs   ◄─── list, search, create, edit, delete
//! └── movement.rs  ◄─── select product, submit movement
//! ```
//!
//! ## Command Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Command Runs                                   │
//! │                                                                         │
//! │  1. Validate the form in estoque-core ──► Err: ValidationError,        │
//! │                                            nothing sent                 │
//! │  2. One backend call ──────────────────► Err: server text or the        │
//! │                                            action's fallback            │
//! │  3. Reload the product list if data changed (awaited, sequential)       │
//! │  4. Reset the form                                                      │
//! │                                                                         │
//! │  A command returns `CommandResult<T>`; the shell hands errors to        │
//! │  `App::report`, which queues them for display.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod movement;
pub mod product;

pub use movement::{LOW_STOCK_WARNING, MOVEMENT_REGISTERED};
pub use product::Confirmation;
