use chrono::{DateTime, Utc};

use crate::errors::PosError;
use crate::models::Product;
use crate::services::CatalogService;

/// The currently displayed set of products: a point-in-time, read-only copy
/// of the remote catalog. Every refresh replaces the snapshot wholesale; a
/// failed refresh keeps the previous snapshot on display.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    products: Vec<Product>,
    fetched_at: Option<DateTime<Utc>>,
    last_query: Option<String>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot with the full catalog.
    pub async fn load<C: CatalogService>(&mut self, service: &C) -> Result<(), PosError> {
        let products = service.list_products().await?;
        self.replace(products, None);
        Ok(())
    }

    /// Replaces the snapshot with server-side search results. An empty query
    /// behaves exactly like `load`.
    pub async fn search<C: CatalogService>(
        &mut self,
        service: &C,
        query: &str,
    ) -> Result<(), PosError> {
        if query.is_empty() {
            return self.load(service).await;
        }
        let products = service.search_products(query).await?;
        self.replace(products, Some(query.to_string()));
        Ok(())
    }

    fn replace(&mut self, products: Vec<Product>, query: Option<String>) {
        self.products = products;
        self.fetched_at = Some(Utc::now());
        self.last_query = query;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// When the current snapshot was taken; None before the first load.
    /// Stock values can be stale by submission time regardless, so this is a
    /// display hint only.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// The query the snapshot was filtered by, if any.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
