use crate::error::ApiResult;
use crate::http_client::HttpClient;
use crate::models::{Product, ProductCreate};

/// Typed client for the marketplace product endpoints.
#[derive(Clone)]
pub struct ProductsClient {
    http: HttpClient,
}

impl ProductsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, skip: u32, limit: u32) -> ApiResult<Vec<Product>> {
        self.http
            .get_json_query("/products/", &[("skip", skip), ("limit", limit)])
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch products: {}", e))
    }

    pub async fn get(&self, product_id: i64) -> ApiResult<Product> {
        self.http
            .get_json(&format!("/products/{}", product_id))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch product {}: {}", product_id, e))
    }

    pub async fn create(&self, product: &ProductCreate) -> ApiResult<Product> {
        self.http
            .post_json("/products/", product)
            .await
            .inspect_err(|e| tracing::error!("Product creation failed: {}", e))
    }
}
