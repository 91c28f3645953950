//! # Movement Commands
//!
//! The stock view's form: pick a product, then register an entry or exit.

use estoque_api::InventoryBackend;
use estoque_core::validation::validate_movement;
use estoque_core::ProductId;
use tracing::info;

use crate::app::App;
use crate::error::{fallback, AppError, CommandResult};

pub const MOVEMENT_REGISTERED: &str = "Movimentação registrada com sucesso.";
pub const LOW_STOCK_WARNING: &str = "Estoque abaixo do mínimo para este produto!";

impl<B: InventoryBackend> App<B> {
    /// Chooses the product the next movement applies to. Only listed
    /// products can be chosen.
    pub fn select_product(&mut self, id: ProductId) -> CommandResult<()> {
        if self.state.catalog.find(id).is_none() {
            return Err(AppError::unknown_product(id));
        }
        self.state.movement.produto_id = Some(id);
        Ok(())
    }

    /// Registers the drafted movement.
    ///
    /// On success queues a confirmation (plus a warning when the product
    /// fell below its minimum), reloads the list and clears quantity and
    /// observation. Product, type and date stay for the next one.
    pub async fn submit_movement(&mut self) -> CommandResult<()> {
        let movement = validate_movement(&self.state.movement, self.state.session.user())?;

        let receipt = self
            .backend()
            .register_movement(&movement)
            .await
            .map_err(|err| AppError::from_client(err, fallback::REGISTER_MOVEMENT))?;

        info!(
            produto_id = movement.produto_id,
            tipo = %movement.tipo,
            quantidade = movement.quantidade,
            abaixo_do_minimo = receipt.is_below_minimum(),
            "Movement registered"
        );

        self.state.notifications.success(MOVEMENT_REGISTERED);
        if receipt.is_below_minimum() {
            self.state.notifications.warning(LOW_STOCK_WARNING);
        }

        self.reload_products().await;
        self.state.movement.clear_after_submit();
        Ok(())
    }
}
