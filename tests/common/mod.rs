//! In-memory catalog double recording every call for scenario assertions.

use std::sync::Mutex;

use catalog_admin::domain::product::{Product, ProductPayload};
use catalog_admin::repository::errors::{RepositoryError, RepositoryResult, StatusCode};
use catalog_admin::repository::{CatalogReader, CatalogWriter};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    List,
    Create(ProductPayload),
    Update(String, ProductPayload),
    Delete(String),
}

#[derive(Default)]
pub struct InMemoryCatalog {
    pub products: Mutex<Vec<Product>>,
    pub calls: Mutex<Vec<CatalogCall>>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
}

impl InMemoryCatalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn status_error() -> RepositoryError {
        RepositoryError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl CatalogReader for InMemoryCatalog {
    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        self.record(CatalogCall::List);
        if self.fail_list {
            return Err(Self::status_error());
        }
        Ok(self.products.lock().unwrap().clone())
    }
}

impl CatalogWriter for InMemoryCatalog {
    async fn create_product(&self, payload: &ProductPayload) -> RepositoryResult<()> {
        self.record(CatalogCall::Create(payload.clone()));
        if self.fail_create {
            return Err(Self::status_error());
        }
        let mut products = self.products.lock().unwrap();
        let id = (products.len() + 1).to_string();
        products.push(Product {
            id,
            title: payload.title.clone(),
            subtitle: payload.subtitle.clone(),
            description: payload.description.clone(),
            img: payload.img.clone(),
            colorback: payload.colorback.clone(),
            colorback2: payload.colorback2.clone(),
        });
        Ok(())
    }

    async fn update_product(&self, id: &str, payload: &ProductPayload) -> RepositoryResult<()> {
        self.record(CatalogCall::Update(id.to_string(), payload.clone()));
        if self.fail_update {
            return Err(Self::status_error());
        }
        let mut products = self.products.lock().unwrap();
        if let Some(product) = products.iter_mut().find(|product| product.id == id) {
            product.title = payload.title.clone();
            product.subtitle = payload.subtitle.clone();
            product.description = payload.description.clone();
            product.img = payload.img.clone();
            product.colorback = payload.colorback.clone();
            product.colorback2 = payload.colorback2.clone();
        }
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> RepositoryResult<()> {
        self.record(CatalogCall::Delete(id.to_string()));
        if self.fail_delete {
            // Simulated transport failure; a non-success status would not
            // even be reported by the real repository.
            return Err(RepositoryError::Unexpected("connection reset".to_string()));
        }
        self.products
            .lock()
            .unwrap()
            .retain(|product| product.id != id);
        Ok(())
    }
}

pub fn sample_product(id: &str, title: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: String::new(),
        description: String::new(),
        img: vec!["http://img.example/1.png".to_string()],
        colorback: "#ffffff".to_string(),
        colorback2: "#ffffff".to_string(),
    }
}
