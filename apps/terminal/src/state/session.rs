//! # Session State
//!
//! Who is logged in and which view is showing.
//!
//! ## Navigation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View Navigation                                 │
//! │                                                                         │
//! │   ┌────────┐  login ok   ┌────────┐ ──produtos──► ┌──────────┐         │
//! │   │ Login  │ ──────────► │  Home  │               │ Products │ ┐       │
//! │   └────────┘             └────────┘ ◄──voltar──── └──────────┘ │       │
//! │       ▲                   │    ▲                               │ load  │
//! │       │                   │    └────voltar──── ┌──────────┐    │ list  │
//! │       └────── sair ───────┘ ─────estoque─────► │  Stock   │ ───┘ on   │
//! │                                                └──────────┘    enter  │
//! │                                                                         │
//! │  Home, Products and Stock need a user. Login is always reachable.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use estoque_core::{User, ValidationError};
use tracing::info;

/// A screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Home,
    Products,
    Stock,
}

/// Work a view asks for when it is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Fetch the product list (with the current search term).
    LoadProducts,
}

impl View {
    pub fn requires_login(self) -> bool {
        !matches!(self, View::Login)
    }

    /// The entry effect of this view.
    pub fn on_enter(self) -> Option<ViewEffect> {
        match self {
            View::Products | View::Stock => Some(ViewEffect::LoadProducts),
            View::Login | View::Home => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Home => "Início",
            View::Products => "Cadastro de Produto",
            View::Stock => "Gestão de Estoque",
        }
    }
}

/// The logged-in user (if any) and the active view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Stores the identity and lands on the home view.
    pub fn sign_in(&mut self, user: User) {
        info!(user_id = user.id, nome = %user.nome, "Session started");
        self.user = Some(user);
        self.view = View::Home;
    }

    /// Drops the identity and returns to the login view.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "Session ended");
        }
        self.view = View::Login;
    }

    /// Switches view, returning the effect the caller must run.
    ///
    /// ## Errors
    /// `ValidationError::NotLoggedIn` for a guarded view without a user; the
    /// current view is left unchanged.
    pub fn navigate(&mut self, target: View) -> Result<Option<ViewEffect>, ValidationError> {
        if target.requires_login() && !self.is_logged_in() {
            return Err(ValidationError::NotLoggedIn);
        }
        self.view = target;
        Ok(target.on_enter())
    }
}
