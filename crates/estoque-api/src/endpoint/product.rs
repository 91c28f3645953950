//! # Product Endpoint
//!
//! CRUD and name search over `/produtos`.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Search Reaches the Backend                     │
//! │                                                                         │
//! │  list(Some("pão doce"))                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /produtos?q=p%C3%A3o+doce   ← term URL-encoded by reqwest         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Backend filters by name (its own matching rules)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  JSON array ──► Vec<Product>   (anything else ──► empty list)          │
//! │                                                                         │
//! │  Ordering is NOT trusted from the backend: the caller re-sorts.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ClientResult;
use estoque_core::{Product, ProductId, ProductPayload};

/// Product calls.
#[derive(Debug, Clone, Copy)]
pub struct ProductEndpoint<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductEndpoint<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ProductEndpoint { client }
    }

    /// Lists products, optionally filtered by name.
    ///
    /// ## Arguments
    /// * `search` - Name filter; `None` or blank lists everything
    ///
    /// ## Returns
    /// The products in backend order. A 2xx body that is not a JSON array
    /// is treated as "no products".
    pub async fn list(&self, search: Option<&str>) -> ClientResult<Vec<Product>> {
        let start = Instant::now();
        let search = search.map(str::trim).filter(|term| !term.is_empty());

        debug!(search = ?search, "GET /produtos");

        let mut request = self.client.http().get(self.client.url("/produtos"));
        if let Some(term) = search {
            request = request.query(&[("q", term)]);
        }

        let body = self.client.send_value(request).await?;
        let products: Vec<Product> = match body {
            Value::Array(_) => serde_json::from_value(body)?,
            other => {
                warn!(body = %other, "Product list was not an array, showing none");
                Vec::new()
            }
        };

        debug!(
            count = products.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Product list loaded"
        );
        Ok(products)
    }

    /// Creates a product.
    ///
    /// ## Returns
    /// The created product when the backend echoes it back; callers reload
    /// the whole list anyway, so a different body is not an error.
    pub async fn create(&self, payload: &ProductPayload) -> ClientResult<Option<Product>> {
        debug!(nome = %payload.nome, "POST /produtos");

        let request = self
            .client
            .http()
            .post(self.client.url("/produtos"))
            .json(payload);

        let created = echoed_product(self.client.send_value(request).await?);
        info!(id = ?created.as_ref().map(|p| p.id), nome = %payload.nome, "Product created");
        Ok(created)
    }

    /// Replaces a product's name, quantity and minimum stock.
    pub async fn update(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ClientResult<Option<Product>> {
        debug!(id, nome = %payload.nome, "PUT /produtos/{{id}}");

        let request = self
            .client
            .http()
            .put(self.client.url(&format!("/produtos/{id}")))
            .json(payload);

        let updated = echoed_product(self.client.send_value(request).await?);
        info!(id, "Product updated");
        Ok(updated)
    }

    /// Deletes a product.
    pub async fn delete(&self, id: ProductId) -> ClientResult<()> {
        debug!(id, "DELETE /produtos/{{id}}");

        let request = self
            .client
            .http()
            .delete(self.client.url(&format!("/produtos/{id}")));

        self.client.send(request).await?;
        info!(id, "Product deleted");
        Ok(())
    }
}

/// Reads a product out of a create/update response, if it is one.
fn echoed_product(body: Value) -> Option<Product> {
    serde_json::from_value(body).ok()
}
