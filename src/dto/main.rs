use crate::domain::product::Product;
use crate::forms::product::ProductForm;

/// Data required to render the dashboard template.
pub struct IndexPageData {
    /// Products in backend order.
    pub products: Vec<Product>,
    /// Draft shown in the edit overlay, when a product is being edited.
    pub active_edit: Option<ProductForm>,
}
