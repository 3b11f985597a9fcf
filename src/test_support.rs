//! In-memory service fakes shared across unit tests. Both fakes can share
//! one event log so tests can assert causal ordering across services.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::PosError;
use crate::models::{
    CreateProductPayload, DashboardStats, Product, SaleRequest, SaleResult, TodaySalesSummary,
};
use crate::services::{CatalogService, SalesService};

pub(crate) fn sample_product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "stock_quantity": stock,
    }))
    .unwrap()
}

pub(crate) struct FakeCatalogService {
    products: Mutex<Vec<Product>>,
    fail_next: AtomicBool,
    events: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalogService {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            fail_next: AtomicBool::new(false),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
    }

    /// The next catalog call fails with CatalogUnavailable.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: &str) {
        self.events.lock().unwrap().push(event.to_string());
    }

    fn check_failure(&self) -> Result<(), PosError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(PosError::CatalogUnavailable(
                "injected catalog failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for FakeCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, PosError> {
        self.record("catalog.load");
        self.check_failure()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, PosError> {
        self.record(&format!("catalog.search:{query}"));
        self.check_failure()?;
        let needle = query.to_lowercase();
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn low_stock_products(&self) -> Result<Vec<Product>, PosError> {
        self.record("catalog.low_stock");
        self.check_failure()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.stock_quantity < 10)
            .cloned()
            .collect())
    }

    async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, PosError> {
        self.record("catalog.create");
        self.check_failure()?;
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = sample_product(id, &payload.name, payload.price, payload.stock_quantity);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_stock(
        &self,
        product_id: i64,
        stock_quantity: i64,
    ) -> Result<Product, PosError> {
        self.record(&format!("catalog.patch:{product_id}"));
        self.check_failure()?;
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| PosError::CatalogUnavailable("HTTP 404: not found".to_string()))?;
        product.stock_quantity = stock_quantity;
        Ok(product.clone())
    }
}

enum SubmitOutcome {
    Succeed,
    Reject(String),
    Transport(String),
}

pub(crate) struct FakeSalesService {
    submissions: Mutex<Vec<SaleRequest>>,
    next_outcome: Mutex<SubmitOutcome>,
    stats: Mutex<DashboardStats>,
    fail_stats: AtomicBool,
    events: Arc<Mutex<Vec<String>>>,
}

impl FakeSalesService {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            next_outcome: Mutex::new(SubmitOutcome::Succeed),
            stats: Mutex::new(DashboardStats::default()),
            fail_stats: AtomicBool::new(false),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shares the catalog fake's event log so cross-service ordering is
    /// observable from either side.
    pub fn sharing_events(catalog: &FakeCatalogService) -> Self {
        let mut service = Self::new();
        service.events = Arc::clone(&catalog.events);
        service
    }

    pub fn reject_next(&self, detail: &str) {
        *self.next_outcome.lock().unwrap() = SubmitOutcome::Reject(detail.to_string());
    }

    pub fn fail_transport_next(&self, detail: &str) {
        *self.next_outcome.lock().unwrap() = SubmitOutcome::Transport(detail.to_string());
    }

    /// Dashboard fetches fail until cleared.
    pub fn fail_stats(&self) {
        self.fail_stats.store(true, Ordering::SeqCst);
    }

    pub fn set_stats(&self, stats: DashboardStats) {
        *self.stats.lock().unwrap() = stats;
    }

    pub fn submissions(&self) -> Vec<SaleRequest> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: &str) {
        self.events.lock().unwrap().push(event.to_string());
    }
}

#[async_trait]
impl SalesService for FakeSalesService {
    async fn submit_sale(&self, request: &SaleRequest) -> Result<SaleResult, PosError> {
        self.record("sales.submit");
        self.submissions.lock().unwrap().push(request.clone());

        let outcome = std::mem::replace(
            &mut *self.next_outcome.lock().unwrap(),
            SubmitOutcome::Succeed,
        );
        match outcome {
            SubmitOutcome::Reject(detail) => Err(PosError::SaleRejected(detail)),
            SubmitOutcome::Transport(detail) => Err(PosError::SaleTransport(detail)),
            SubmitOutcome::Succeed => {
                let count = self.submissions.lock().unwrap().len();
                let result: SaleResult = serde_json::from_value(serde_json::json!({
                    "id": count,
                    "receipt_number": format!("RCP{count:08}"),
                    "payment_method": request.payment_method,
                    "items": [],
                }))
                .unwrap();
                Ok(result)
            }
        }
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, PosError> {
        self.record("dashboard.stats");
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(PosError::AggregationUnavailable(
                "injected stats failure".to_string(),
            ));
        }
        Ok(self.stats.lock().unwrap().clone())
    }

    async fn today_sales(&self) -> Result<TodaySalesSummary, PosError> {
        self.record("dashboard.today");
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(PosError::AggregationUnavailable(
                "injected stats failure".to_string(),
            ));
        }
        let stats = self.stats.lock().unwrap();
        Ok(serde_json::from_value(serde_json::json!({
            "total_sales": stats.today_sales,
            "total_revenue": stats.today_revenue,
            "sales": [],
        }))
        .unwrap())
    }
}
