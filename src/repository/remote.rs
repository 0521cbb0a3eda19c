use reqwest::Client;

use crate::domain::product::{Product, ProductPayload};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogReader, CatalogWriter};

/// HTTP implementation of the catalog repository against the
/// `/api/products` collection of the configured backend.
#[derive(Clone)]
pub struct RemoteCatalog {
    http: Client,
    base_url: String,
}

impl RemoteCatalog {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }
}

impl CatalogReader for RemoteCatalog {
    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let response = self.http.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(RepositoryError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl CatalogWriter for RemoteCatalog {
    async fn create_product(&self, payload: &ProductPayload) -> RepositoryResult<()> {
        let response = self
            .http
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RepositoryError::Status(response.status()));
        }
        // The created entity is not consumed; callers observe it by
        // re-fetching the list.
        Ok(())
    }

    async fn update_product(&self, id: &str, payload: &ProductPayload) -> RepositoryResult<()> {
        // PATCH verb, full-replace body. The backend treats this as
        // upsert-by-id over the whole field set.
        let response = self
            .http
            .patch(self.item_url(id))
            .json(payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RepositoryError::Status(response.status()));
        }
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> RepositoryResult<()> {
        // The response status is not inspected; only transport failures
        // surface to the caller.
        self.http.delete(self.item_url(id)).send().await?;
        Ok(())
    }
}
