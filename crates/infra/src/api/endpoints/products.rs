//! Catalog endpoints

use std::sync::Arc;

use awsomeshop_domain::{Product, Result};
use serde::Deserialize;

use crate::api::ApiClient;

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

/// `/products` operations.
pub struct ProductsApi {
    api: Arc<ApiClient>,
}

impl ProductsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// GET `/products` — active catalog.
    pub async fn list(&self) -> Result<Vec<Product>> {
        let envelope: ProductsEnvelope = self.api.get("/products").await?;
        Ok(envelope.products)
    }

    /// GET `/products/:id`.
    pub async fn get(&self, id: i64) -> Result<Product> {
        let envelope: ProductEnvelope = self.api.get(&format!("/products/{id}")).await?;
        Ok(envelope.product)
    }
}
