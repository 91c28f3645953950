//! # Form State
//!
//! The two forms the operator fills in, kept as raw text exactly as typed.
//! Nothing here is validated; [`crate::validation`] turns the text into
//! request bodies when the operator submits.
//!
//! ## Product Editor State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Editor Modes                                 │
//! │                                                                         │
//! │                     start_edit(product)                                 │
//! │     ┌──────────────┐ ─────────────────────► ┌──────────────────┐        │
//! │     │   Creating   │                        │   Editing(id)    │        │
//! │     │ (empty form) │ ◄───────────────────── │ (product fields) │        │
//! │     └──────────────┘   reset() after save   └──────────────────┘        │
//! │            ▲               or cancel()              │                   │
//! │            │                                        │ start_edit(other) │
//! │            │ reset() after create                   ▼                   │
//! │            └──────────────               replaces the edit (only one    │
//! │                                          edit is ever active)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{MovementType, Product, ProductId};

// =============================================================================
// Product Form
// =============================================================================

/// Text fields of the product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub nome: String,
    pub quantidade: String,
    pub estoque_minimo: String,
}

impl Default for ProductForm {
    /// A fresh form shows zeros in both numeric fields.
    fn default() -> Self {
        ProductForm {
            nome: String::new(),
            quantidade: "0".to_string(),
            estoque_minimo: "0".to_string(),
        }
    }
}

impl ProductForm {
    /// Creates a form from raw text.
    pub fn new(
        nome: impl Into<String>,
        quantidade: impl Into<String>,
        estoque_minimo: impl Into<String>,
    ) -> Self {
        ProductForm {
            nome: nome.into(),
            quantidade: quantidade.into(),
            estoque_minimo: estoque_minimo.into(),
        }
    }

    /// Fills the form with an existing product's values.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            nome: product.nome.clone(),
            quantidade: product.quantidade.to_string(),
            estoque_minimo: product.estoque_minimo.to_string(),
        }
    }
}

/// Whether the shared product form creates or edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(ProductId),
}

/// The product form plus the mode it is in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEditor {
    pub form: ProductForm,
    mode: FormMode,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The id being edited, if any.
    pub fn editing_id(&self) -> Option<ProductId> {
        match self.mode {
            FormMode::Creating => None,
            FormMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Loads a product into the form and switches to editing it.
    ///
    /// Any edit already in progress is discarded.
    pub fn start_edit(&mut self, product: &Product) {
        self.form = ProductForm::from_product(product);
        self.mode = FormMode::Editing(product.id);
    }

    /// Discards the in-progress edit and clears the form.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Back to an empty form in creating mode.
    pub fn reset(&mut self) {
        self.form = ProductForm::default();
        self.mode = FormMode::Creating;
    }
}

// =============================================================================
// Movement Draft
// =============================================================================

/// Text fields of the movement form.
///
/// `tipo` stays a string because the form is where an unknown type would be
/// typed; it is checked on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementDraft {
    pub produto_id: Option<ProductId>,
    pub tipo: String,
    pub quantidade: String,
    pub data: String,
    pub observacao: String,
}

impl Default for MovementDraft {
    fn default() -> Self {
        MovementDraft {
            produto_id: None,
            tipo: MovementType::default().as_str().to_string(),
            quantidade: String::new(),
            data: String::new(),
            observacao: String::new(),
        }
    }
}

impl MovementDraft {
    /// Clears the per-movement fields after a successful submission.
    ///
    /// Product, type and date are kept so the next movement for the same
    /// product only needs a new quantity.
    pub fn clear_after_submit(&mut self) {
        self.quantidade.clear();
        self.observacao.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn caneta() -> Product {
        Product {
            id: 42,
            nome: "Caneta".to_string(),
            quantidade: 10,
            estoque_minimo: 5,
        }
    }

    #[test]
    fn test_editor_starts_in_creating_mode() {
        let editor = ProductEditor::new();
        assert_eq!(editor.mode(), FormMode::Creating);
        assert_eq!(editor.editing_id(), None);
        assert_eq!(editor.form, ProductForm::default());
    }

    #[test]
    fn test_start_edit_loads_fields() {
        let mut editor = ProductEditor::new();
        editor.start_edit(&caneta());

        assert!(editor.is_editing());
        assert_eq!(editor.editing_id(), Some(42));
        assert_eq!(editor.form, ProductForm::new("Caneta", "10", "5"));
    }

    #[test]
    fn test_second_edit_replaces_first() {
        let mut editor = ProductEditor::new();
        editor.start_edit(&caneta());

        let lapis = Product {
            id: 7,
            nome: "Lápis".to_string(),
            quantidade: 1,
            estoque_minimo: 2,
        };
        editor.start_edit(&lapis);

        assert_eq!(editor.editing_id(), Some(7));
        assert_eq!(editor.form.nome, "Lápis");
    }

    #[test]
    fn test_cancel_discards_edit() {
        let mut editor = ProductEditor::new();
        editor.start_edit(&caneta());
        editor.form.nome = "Caneta azul".to_string();

        editor.cancel();

        assert_eq!(editor.mode(), FormMode::Creating);
        assert_eq!(editor.form, ProductForm::default());
    }

    #[test]
    fn test_movement_draft_keeps_context_after_submit() {
        let mut draft = MovementDraft {
            produto_id: Some(3),
            tipo: "saida".to_string(),
            quantidade: "4".to_string(),
            data: "2024-05-01".to_string(),
            observacao: "venda balcão".to_string(),
        };

        draft.clear_after_submit();

        assert_eq!(draft.produto_id, Some(3));
        assert_eq!(draft.tipo, "saida");
        assert_eq!(draft.data, "2024-05-01");
        assert!(draft.quantidade.is_empty());
        assert!(draft.observacao.is_empty());
    }

    #[test]
    fn test_movement_draft_defaults_to_entrada() {
        assert_eq!(MovementDraft::default().tipo, "entrada");
    }
}
