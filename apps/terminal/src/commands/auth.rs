//! # Session Commands
//!
//! Login, logout and view switching.

use estoque_api::InventoryBackend;
use estoque_core::validation::validate_credentials;
use tracing::debug;

use crate::app::App;
use crate::error::{fallback, AppError, CommandResult};
use crate::state::{View, ViewEffect};

impl<B: InventoryBackend> App<B> {
    /// Logs in with the login form's email and password.
    ///
    /// On success the form is cleared and the home view shown. On failure
    /// the form keeps what was typed.
    pub async fn login(&mut self) -> CommandResult<()> {
        let credentials = validate_credentials(&self.state.login.email, &self.state.login.senha)?;

        let user = self
            .backend()
            .login(&credentials)
            .await
            .map_err(|err| AppError::from_client(err, fallback::LOGIN))?;

        self.state.login.clear();
        self.state.session.sign_in(user);
        Ok(())
    }

    /// Fills the login form and submits it.
    pub async fn login_with(&mut self, email: &str, senha: &str) -> CommandResult<()> {
        self.state.login.email = email.to_string();
        self.state.login.senha = senha.to_string();
        self.login().await
    }

    pub fn logout(&mut self) {
        self.state.session.sign_out();
    }

    /// Switches view and runs its entry effect.
    ///
    /// A failed product load on entry is queued as a notification; the
    /// navigation itself still succeeds.
    pub async fn navigate(&mut self, view: View) -> CommandResult<()> {
        let effect = self.state.session.navigate(view)?;
        debug!(?view, ?effect, "Navigated");

        if let Some(effect) = effect {
            self.run_effect(effect).await;
        }
        Ok(())
    }

    async fn run_effect(&mut self, effect: ViewEffect) {
        match effect {
            ViewEffect::LoadProducts => self.reload_products().await,
        }
    }
}
