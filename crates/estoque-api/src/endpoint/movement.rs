//! # Movement Endpoint
//!
//! `POST /movimentacoes`. The backend applies the movement to the product's
//! quantity and reports whether the product ended up below its minimum.

use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ClientResult;
use estoque_core::{MovementReceipt, NewMovement};

/// Stock movement calls.
#[derive(Debug, Clone, Copy)]
pub struct MovementEndpoint<'a> {
    client: &'a ApiClient,
}

impl<'a> MovementEndpoint<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        MovementEndpoint { client }
    }

    /// Registers an entry or exit.
    ///
    /// ## Returns
    /// The receipt; a body without `produto.abaixo_do_minimo` reads as
    /// "not below minimum". An unreadable body is logged and read the same
    /// way, since the movement itself was accepted.
    pub async fn register(&self, movement: &NewMovement) -> ClientResult<MovementReceipt> {
        debug!(
            produto_id = movement.produto_id,
            tipo = %movement.tipo,
            quantidade = movement.quantidade,
            "POST /movimentacoes"
        );

        let request = self
            .client
            .http()
            .post(self.client.url("/movimentacoes"))
            .json(movement);

        let body = self.client.send_value(request).await?;
        let receipt: MovementReceipt = match serde_json::from_value(body.clone()) {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, body = %body, "Unreadable movement receipt, assuming stock is fine");
                MovementReceipt::default()
            }
        };

        info!(
            produto_id = movement.produto_id,
            abaixo_do_minimo = receipt.is_below_minimum(),
            "Movement registered"
        );
        Ok(receipt)
    }
}
