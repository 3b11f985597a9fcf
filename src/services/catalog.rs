//! Catalog Service contract: product lookup, search, and stock maintenance.

use async_trait::async_trait;

use super::{describe_transport_error, extract_error_detail, ApiClient};
use crate::errors::PosError;
use crate::models::{CreateProductPayload, Product, ProductListResponse, UpdateStockPayload};

/// Remote product catalog. Every returned snapshot is point-in-time and may
/// be stale by the time a sale is submitted; the service side owns the truth.
#[async_trait]
pub trait CatalogService {
    /// Full (or first-page) catalog listing.
    async fn list_products(&self) -> Result<Vec<Product>, PosError>;

    /// Server-side name/barcode keyword match. An empty query returns the
    /// full catalog, same as `list_products`.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, PosError>;

    /// Products below the server's low-stock threshold.
    async fn low_stock_products(&self) -> Result<Vec<Product>, PosError>;

    async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, PosError>;

    /// Partial update of one product's stock count.
    async fn update_stock(&self, product_id: i64, stock_quantity: i64)
        -> Result<Product, PosError>;
}

/// HTTP implementation against the /products/ endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: ApiClient,
}

impl HttpCatalogService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn fetch_products(&self, path: &str, query: Option<&str>) -> Result<Vec<Product>, PosError> {
        let mut request = self.client.get(path);
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PosError::CatalogUnavailable(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::CatalogUnavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        let list: ProductListResponse = response
            .json()
            .await
            .map_err(|e| PosError::CatalogUnavailable(format!("Malformed product list: {}", e)))?;

        Ok(list.into_products())
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, PosError> {
        self.fetch_products("/products/", None).await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, PosError> {
        if query.is_empty() {
            return self.list_products().await;
        }
        self.fetch_products("/products/search/", Some(query)).await
    }

    async fn low_stock_products(&self) -> Result<Vec<Product>, PosError> {
        self.fetch_products("/products/low_stock/", None).await
    }

    async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, PosError> {
        let response = self
            .client
            .post("/products/")
            .json(payload)
            .send()
            .await
            .map_err(|e| PosError::CatalogUnavailable(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::CatalogUnavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PosError::CatalogUnavailable(format!("Malformed product: {}", e)))
    }

    async fn update_stock(
        &self,
        product_id: i64,
        stock_quantity: i64,
    ) -> Result<Product, PosError> {
        let payload = UpdateStockPayload { stock_quantity };
        let response = self
            .client
            .patch(&format!("/products/{}/", product_id))
            .json(&payload)
            .send()
            .await
            .map_err(|e| PosError::CatalogUnavailable(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::CatalogUnavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PosError::CatalogUnavailable(format!("Malformed product: {}", e)))
    }
}
