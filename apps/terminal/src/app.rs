//! # App
//!
//! The backend plus the state it feeds. Commands are `impl` blocks in
//! [`crate::commands`]; the shell and the tests drive the same methods.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          App<B: InventoryBackend>                       │
//! │                                                                         │
//! │   shell line ──► Action ──► app.create_product().await                 │
//! │                                   │                                     │
//! │                                   ├── validate (estoque-core)           │
//! │                                   ├── backend call (B)                  │
//! │                                   └── mutate AppState                   │
//! │                                                                         │
//! │   Err(AppError) ──► app.report(..) ──► notification queue              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use estoque_api::InventoryBackend;

use crate::error::CommandResult;
use crate::state::AppState;

pub struct App<B> {
    backend: B,
    pub state: AppState,
}

impl<B: InventoryBackend> App<B> {
    pub fn new(backend: B) -> Self {
        App {
            backend,
            state: AppState::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queues a failed command's message; passes a success through.
    pub fn report<T>(&mut self, result: CommandResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.state.notifications.error(&err);
                None
            }
        }
    }
}
