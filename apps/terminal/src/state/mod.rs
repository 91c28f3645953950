//! # Application State
//!
//! Everything the terminal app remembers between actions, in one struct
//! owned by [`crate::App`].
//!
//! ```text
//! state/
//! ├── mod.rs            ◄─── AppState, LoginForm
//! ├── session.rs        ◄─── User + active view, navigation guard
//! ├── catalog.rs        ◄─── Sorted product list, loading flag, search term
//! ├── notifications.rs  ◄─── Queue drained by the shell
//! └── config.rs         ◄─── Startup configuration
//! ```
//!
//! Nothing here is persisted; quitting forgets the session and every draft.

pub mod catalog;
pub mod config;
pub mod notifications;
pub mod session;

pub use catalog::Catalog;
pub use config::{AppConfig, ConfigError};
pub use notifications::{Notification, NotificationQueue, Severity};
pub use session::{Session, View, ViewEffect};

use estoque_core::form::{MovementDraft, ProductEditor};

/// Text typed into the login screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("senha", &"***")
            .finish()
    }
}

impl LoginForm {
    pub fn clear(&mut self) {
        self.email.clear();
        self.senha.clear();
    }
}

/// The whole client state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub login: LoginForm,

    /// Shared by the product and stock views
    pub catalog: Catalog,

    /// Product create/edit form
    pub editor: ProductEditor,

    /// Movement form of the stock view
    pub movement: MovementDraft,

    pub notifications: NotificationQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
