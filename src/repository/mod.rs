//! Access to the remote product catalog behind reader/writer traits.

#![allow(async_fn_in_trait)]

use crate::domain::product::{Product, ProductPayload};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod remote;

pub trait CatalogReader {
    /// Fetches the full catalog.
    async fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

pub trait CatalogWriter {
    /// Creates a product; the payload must not carry an `id`.
    async fn create_product(&self, payload: &ProductPayload) -> RepositoryResult<()>;
    /// Replaces the full field set of an existing product.
    async fn update_product(&self, id: &str, payload: &ProductPayload) -> RepositoryResult<()>;
    /// Deletes a product. Irreversible.
    async fn delete_product(&self, id: &str) -> RepositoryResult<()>;
}
