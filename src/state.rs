//! In-memory snapshot of the remote catalog for the single admin session.
//!
//! The snapshot is never authoritative: it is replaced wholesale on every
//! refresh and discarded after mutations rather than merged optimistically.

use crate::domain::product::Product;
use crate::forms::product::ProductForm;

#[derive(Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    active_edit: Option<ProductForm>,
}

impl CatalogState {
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replaces the snapshot wholesale with a fresh fetch result.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    #[must_use]
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn active_edit(&self) -> Option<&ProductForm> {
        self.active_edit.as_ref()
    }

    /// Opens the edit form with the given draft. Only one product can be in
    /// edit mode; any previous unsaved draft is discarded silently.
    pub fn begin_edit(&mut self, draft: ProductForm) {
        self.active_edit = Some(draft);
    }

    /// Closes the edit form without persisting anything.
    pub fn cancel_edit(&mut self) {
        self.active_edit = None;
    }
}
