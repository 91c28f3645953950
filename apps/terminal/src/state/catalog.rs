//! # Catalog State
//!
//! The product list both views read. Replaced wholesale on every load and
//! always held in display order.

use estoque_core::collation::sort_by_name;
use estoque_core::{Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    loading: bool,

    /// Term the list is filtered by; reloads reuse it. Empty means "all".
    search_term: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products sorted by name (accent and case insensitive).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search_term(&mut self) {
        self.search_term.clear();
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Ends a load. `Some` replaces the list; `None` (a failed load) keeps
    /// the previous one.
    pub fn finish_load(&mut self, products: Option<Vec<Product>>) {
        self.loading = false;
        if let Some(mut products) = products {
            sort_by_name(&mut products);
            self.products = products;
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products below their minimum.
    pub fn low_stock_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_below_minimum()).count()
    }
}
