//! # Product Commands
//!
//! The product registry view: list, search, create, edit, delete.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Form Modes                                   │
//! │                                                                         │
//! │   Creating ──── editar <id> ────► Editing(id)                          │
//! │      ▲                                 │                                │
//! │      ├──── salvar (update ok) ─────────┤                                │
//! │      └──── cancelar ───────────────────┘                                │
//! │                                                                         │
//! │   cadastrar (create ok) ──► list reloaded, form cleared                │
//! │   Any validation failure  ──► form untouched, nothing sent             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use estoque_api::InventoryBackend;
use estoque_core::form::FormMode;
use estoque_core::validation::{validate_product_form, validate_search_term};
use estoque_core::ProductId;
use tracing::{debug, info};

use crate::app::App;
use crate::error::{fallback, AppError, CommandResult};

/// The operator's answer to "delete this product?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Declined,
}

impl Confirmation {
    /// Reads a typed answer; only an explicit yes grants.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "s" | "sim" | "y" | "yes" => Confirmation::Granted,
            _ => Confirmation::Declined,
        }
    }
}

impl<B: InventoryBackend> App<B> {
    /// Fetches the product list for the current search term.
    ///
    /// On failure the previous list stays on screen.
    pub async fn load_products(&mut self) -> CommandResult<()> {
        let term = self.state.catalog.search_term().to_string();
        let search = (!term.is_empty()).then_some(term.as_str());

        self.state.catalog.begin_load();
        let result = self.backend().list_products(search).await;
        match result {
            Ok(products) => {
                debug!(count = products.len(), "Products loaded");
                self.state.catalog.finish_load(Some(products));
                Ok(())
            }
            Err(err) => {
                self.state.catalog.finish_load(None);
                Err(AppError::from_client(err, fallback::LOAD_PRODUCTS))
            }
        }
    }

    /// Reload after a change. Its failure is queued on its own and does
    /// not undo the change that triggered it.
    pub(crate) async fn reload_products(&mut self) {
        let result = self.load_products().await;
        self.report(result);
    }

    /// Filters the list by name. Terms under two characters are rejected.
    pub async fn search(&mut self, term: &str) -> CommandResult<()> {
        let term = validate_search_term(term)?;
        self.state.catalog.set_search_term(term);
        self.load_products().await
    }

    /// Drops the filter and reloads everything.
    pub async fn clear_search(&mut self) -> CommandResult<()> {
        self.state.catalog.clear_search_term();
        self.load_products().await
    }

    /// Creates a product from the form.
    pub async fn create_product(&mut self) -> CommandResult<()> {
        let payload = validate_product_form(&self.state.editor.form)?;

        self.backend()
            .create_product(&payload)
            .await
            .map_err(|err| AppError::from_client(err, fallback::CREATE_PRODUCT))?;
        info!(nome = %payload.nome, "Product created");

        self.reload_products().await;
        self.state.editor.reset();
        Ok(())
    }

    /// Saves the form over product `id` and leaves editing mode.
    pub async fn update_product(&mut self, id: ProductId) -> CommandResult<()> {
        let payload = validate_product_form(&self.state.editor.form)?;

        self.backend()
            .update_product(id, &payload)
            .await
            .map_err(|err| AppError::from_client(err, fallback::SAVE_PRODUCT))?;
        info!(id, nome = %payload.nome, "Product updated");

        self.reload_products().await;
        self.state.editor.reset();
        Ok(())
    }

    /// Creates or updates, depending on the form mode.
    pub async fn submit_product(&mut self) -> CommandResult<()> {
        match self.state.editor.mode() {
            FormMode::Creating => self.create_product().await,
            FormMode::Editing(id) => self.update_product(id).await,
        }
    }

    /// Loads a listed product into the form for editing.
    pub fn start_edit(&mut self, id: ProductId) -> CommandResult<()> {
        let product = self
            .state
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::unknown_product(id))?;
        self.state.editor.start_edit(&product);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.state.editor.cancel();
    }

    /// Deletes a product once the operator has confirmed.
    ///
    /// ## Returns
    /// `true` if the product was deleted, `false` if the operator declined.
    pub async fn delete_product(
        &mut self,
        id: ProductId,
        confirmation: Confirmation,
    ) -> CommandResult<bool> {
        if confirmation == Confirmation::Declined {
            debug!(id, "Delete declined");
            return Ok(false);
        }

        self.backend()
            .delete_product(id)
            .await
            .map_err(|err| AppError::from_client(err, fallback::DELETE_PRODUCT))?;
        info!(id, "Product deleted");

        self.reload_products().await;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{logged_in_app, product, Call, FakeBackend, Op};
    use estoque_api::ClientError;
    use estoque_core::form::ProductForm;
    use estoque_core::ProductPayload;

    fn names(app: &App<FakeBackend>) -> Vec<String> {
        app.state.catalog.products().iter().map(|p| p.nome.clone()).collect()
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let backend = FakeBackend::new().with_products(vec![
            product(1, "Óleo", 3, 1),
            product(2, "caneta", 10, 5),
            product(3, "Açúcar", 2, 4),
            product(4, "Borracha", 1, 0),
        ]);
        let mut app = logged_in_app(backend);

        app.load_products().await.unwrap();

        assert_eq!(names(&app), ["Açúcar", "Borracha", "caneta", "Óleo"]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let backend = FakeBackend::new().with_products(vec![product(1, "Caneta", 10, 5)]);
        let mut app = logged_in_app(backend);
        app.load_products().await.unwrap();

        app.backend().fail(Op::List, ClientError::server(500, None));
        let err = app.load_products().await.unwrap_err();

        assert_eq!(err.message, "Erro ao carregar produtos");
        assert_eq!(names(&app), ["Caneta"]);
        assert!(!app.state.catalog.is_loading());
    }

    #[tokio::test]
    async fn test_search() {
        let backend = FakeBackend::new().with_products(vec![
            product(1, "Caneta azul", 10, 5),
            product(2, "Lápis", 10, 5),
        ]);
        let mut app = logged_in_app(backend);

        app.search("  caneta ").await.unwrap();

        assert_eq!(names(&app), ["Caneta azul"]);
        assert_eq!(app.backend().calls(), vec![Call::List(Some("caneta".to_string()))]);
        assert_eq!(app.state.catalog.search_term(), "caneta");
    }

    #[tokio::test]
    async fn test_short_search_is_rejected() {
        let mut app = logged_in_app(FakeBackend::new());

        for term in ["", "a", " b "] {
            let err = app.search(term).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::Validation);
            assert_eq!(err.message, "Digite ao menos 2 caracteres.");
        }
        assert_eq!(app.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_search_reloads_everything() {
        let backend = FakeBackend::new().with_products(vec![
            product(1, "Caneta", 10, 5),
            product(2, "Lápis", 10, 5),
        ]);
        let mut app = logged_in_app(backend);
        app.search("lá").await.unwrap();

        app.clear_search().await.unwrap();

        assert_eq!(app.state.catalog.search_term(), "");
        assert_eq!(names(&app), ["Caneta", "Lápis"]);
        assert_eq!(app.backend().calls().last(), Some(&Call::List(None)));
    }

    #[tokio::test]
    async fn test_reload_keeps_search_term() {
        let backend = FakeBackend::new().with_products(vec![product(1, "Caneta", 10, 5)]);
        let mut app = logged_in_app(backend);
        app.search("can").await.unwrap();

        app.state.editor.form = ProductForm::new("Cano", "1", "0");
        app.create_product().await.unwrap();

        assert_eq!(
            app.backend().calls().last(),
            Some(&Call::List(Some("can".to_string())))
        );
    }

    #[tokio::test]
    async fn test_create_trims_and_reloads() {
        let mut app = logged_in_app(FakeBackend::new());
        app.state.editor.form = ProductForm::new(" Caneta ", "10", "5");

        app.create_product().await.unwrap();

        assert_eq!(
            app.backend().calls(),
            vec![
                Call::Create(ProductPayload {
                    nome: "Caneta".to_string(),
                    quantidade: 10,
                    estoque_minimo: 5,
                }),
                Call::List(None),
            ]
        );
        assert_eq!(names(&app), ["Caneta"]);
        assert_eq!(app.state.editor.form, ProductForm::default());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mut app = logged_in_app(FakeBackend::new());

        let cases = [
            (ProductForm::new("   ", "1", "1"), "O nome é obrigatório."),
            (
                ProductForm::new("Caneta", "", "1"),
                "Quantidade inválida (não pode ser vazia ou negativa).",
            ),
            (
                ProductForm::new("Caneta", "dez", "1"),
                "Quantidade inválida (não pode ser vazia ou negativa).",
            ),
            (
                ProductForm::new("Caneta", "1", "-1"),
                "Estoque mínimo inválido (não pode ser vazio ou negativo).",
            ),
        ];

        for (form, message) in cases {
            app.state.editor.form = form.clone();
            let err = app.create_product().await.unwrap_err();
            assert_eq!(err.message, message);
            // Rejected input stays in the form.
            assert_eq!(app.state.editor.form, form);
        }
        assert_eq!(app.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_failure_uses_server_message_or_fallback() {
        let backend = FakeBackend::new();
        backend.fail(
            Op::Create,
            ClientError::server(409, Some("Produto já cadastrado".to_string())),
        );
        let mut app = logged_in_app(backend);
        app.state.editor.form = ProductForm::new("Caneta", "1", "1");

        let err = app.create_product().await.unwrap_err();
        assert_eq!(err.message, "Produto já cadastrado");
        assert_eq!(app.state.editor.form.nome, "Caneta");

        app.backend().fail(Op::Create, ClientError::Timeout);
        let err = app.create_product().await.unwrap_err();
        assert_eq!(err.message, "Erro ao criar produto");
    }

    #[tokio::test]
    async fn test_create_survives_failed_reload() {
        let backend = FakeBackend::new();
        backend.fail(Op::List, ClientError::server(500, None));
        let mut app = logged_in_app(backend);
        app.state.editor.form = ProductForm::new("Caneta", "1", "1");

        app.create_product().await.unwrap();

        assert!(app.backend().stored(101).is_some());
        assert_eq!(app.state.editor.form, ProductForm::default());
        let notes = app.state.notifications.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Erro ao carregar produtos");
    }

    #[tokio::test]
    async fn test_edit_and_save() {
        let backend = FakeBackend::new().with_products(vec![product(7, "Caneta", 10, 5)]);
        let mut app = logged_in_app(backend);
        app.load_products().await.unwrap();

        app.start_edit(7).unwrap();
        assert_eq!(app.state.editor.mode(), FormMode::Editing(7));
        assert_eq!(app.state.editor.form, ProductForm::new("Caneta", "10", "5"));

        app.state.editor.form.quantidade = "3".to_string();
        app.submit_product().await.unwrap();

        assert_eq!(app.backend().stored(7).map(|p| p.quantidade), Some(3));
        assert_eq!(app.state.editor.mode(), FormMode::Creating);
        assert_eq!(app.state.editor.form, ProductForm::default());
        assert!(app.state.catalog.find(7).is_some_and(|p| p.is_below_minimum()));
    }

    #[tokio::test]
    async fn test_failed_save_stays_in_edit_mode() {
        let backend = FakeBackend::new().with_products(vec![product(7, "Caneta", 10, 5)]);
        backend.fail(Op::Update, ClientError::server(500, None));
        let mut app = logged_in_app(backend);
        app.load_products().await.unwrap();
        app.start_edit(7).unwrap();

        let err = app.submit_product().await.unwrap_err();

        assert_eq!(err.message, "Erro ao salvar produto");
        assert_eq!(app.state.editor.mode(), FormMode::Editing(7));
    }

    #[tokio::test]
    async fn test_start_edit_replaces_and_cancel_clears() {
        let backend = FakeBackend::new().with_products(vec![
            product(1, "Caneta", 10, 5),
            product(2, "Lápis", 4, 2),
        ]);
        let mut app = logged_in_app(backend);
        app.load_products().await.unwrap();

        app.start_edit(1).unwrap();
        app.start_edit(2).unwrap();
        assert_eq!(app.state.editor.editing_id(), Some(2));
        assert_eq!(app.state.editor.form.nome, "Lápis");

        app.cancel_edit();
        assert!(!app.state.editor.is_editing());
        assert_eq!(app.state.editor.form, ProductForm::default());
    }

    #[tokio::test]
    async fn test_edit_unknown_product() {
        let mut app = logged_in_app(FakeBackend::new());

        let err = app.start_edit(42).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(!app.state.editor.is_editing());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let backend = FakeBackend::new().with_products(vec![product(3, "Caneta", 10, 5)]);
        let mut app = logged_in_app(backend);

        let deleted = app.delete_product(3, Confirmation::Declined).await.unwrap();
        assert!(!deleted);
        assert_eq!(app.backend().call_count(), 0);

        let deleted = app.delete_product(3, Confirmation::Granted).await.unwrap();
        assert!(deleted);
        assert_eq!(app.backend().calls(), vec![Call::Delete(3), Call::List(None)]);
        assert!(app.state.catalog.products().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let mut app = logged_in_app(FakeBackend::new());
        app.backend().fail(Op::Delete, ClientError::server(500, None));

        let err = app.delete_product(3, Confirmation::Granted).await.unwrap_err();
        assert_eq!(err.message, "Erro ao excluir produto");
    }

    #[test]
    fn test_confirmation_answers() {
        assert_eq!(Confirmation::from_answer("s"), Confirmation::Granted);
        assert_eq!(Confirmation::from_answer(" Sim "), Confirmation::Granted);
        assert_eq!(Confirmation::from_answer(""), Confirmation::Declined);
        assert_eq!(Confirmation::from_answer("n"), Confirmation::Declined);
        assert_eq!(Confirmation::from_answer("talvez"), Confirmation::Declined);
    }
}
