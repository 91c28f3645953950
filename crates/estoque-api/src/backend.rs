//! # Inventory Backend Seam
//!
//! The interface the terminal app programs against. [`ApiClient`] is the
//! real implementation; tests substitute an in-memory recorder so they can
//! assert that a rejected form never produced a request.
//!
//! ```text
//! ┌──────────────────────┐        ┌────────────────────────────────────┐
//! │  App<B>              │        │  impl InventoryBackend for ...     │
//! │  (terminal commands) │ ─────► │  • ApiClient   (reqwest, real)     │
//! │                      │        │  • test fakes  (recording, memory) │
//! └──────────────────────┘        └────────────────────────────────────┘
//! ```
//!
//! The app runs on a single-threaded runtime, so the returned futures are not
//! required to be `Send`.

use crate::client::ApiClient;
use crate::error::ClientResult;
use estoque_core::{
    Credentials, MovementReceipt, NewMovement, Product, ProductId, ProductPayload, User,
};

/// Every backend call the client makes.
#[allow(async_fn_in_trait)]
pub trait InventoryBackend {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> ClientResult<User>;

    /// `GET /produtos` or `GET /produtos?q=term`
    async fn list_products(&self, search: Option<&str>) -> ClientResult<Vec<Product>>;

    /// `POST /produtos`
    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Option<Product>>;

    /// `PUT /produtos/{id}`
    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ClientResult<Option<Product>>;

    /// `DELETE /produtos/{id}`
    async fn delete_product(&self, id: ProductId) -> ClientResult<()>;

    /// `POST /movimentacoes`
    async fn register_movement(&self, movement: &NewMovement) -> ClientResult<MovementReceipt>;
}

impl InventoryBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        self.auth().login(credentials).await
    }

    async fn list_products(&self, search: Option<&str>) -> ClientResult<Vec<Product>> {
        self.products().list(search).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Option<Product>> {
        self.products().create(payload).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ClientResult<Option<Product>> {
        self.products().update(id, payload).await
    }

    async fn delete_product(&self, id: ProductId) -> ClientResult<()> {
        self.products().delete(id).await
    }

    async fn register_movement(&self, movement: &NewMovement) -> ClientResult<MovementReceipt> {
        self.movements().register(movement).await
    }
}
