//! # Auth Endpoint
//!
//! `POST /auth/login`. The backend owns sessions; the client only keeps the
//! returned user in memory.

use tracing::{debug, info};

use crate::client::ApiClient;
use crate::error::ClientResult;
use estoque_core::{Credentials, User};

/// Authentication calls.
#[derive(Debug, Clone, Copy)]
pub struct AuthEndpoint<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthEndpoint<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        AuthEndpoint { client }
    }

    /// Exchanges email and password for the user record.
    ///
    /// ## Errors
    /// Wrong credentials come back as `ClientError::Server` carrying the
    /// backend's message (e.g. "Credenciais inválidas").
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        debug!(email = %credentials.email, "POST /auth/login");

        let request = self
            .client
            .http()
            .post(self.client.url("/auth/login"))
            .json(credentials);

        let user: User = self.client.send_json(request).await?;

        info!(user_id = user.id, "Logged in");
        Ok(user)
    }
}
