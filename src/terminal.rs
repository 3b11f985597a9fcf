//! One POS terminal session: the single owner of the cart, catalog snapshot,
//! checkout state machine, and dashboard view. All cart mutations flow
//! through this facade, and only the submission path may clear the cart.

use crate::cart::Cart;
use crate::catalog::CatalogIndex;
use crate::dashboard::DashboardAggregator;
use crate::errors::PosError;
use crate::log_warn;
use crate::models::{
    CreateProductPayload, DashboardStats, PaymentMethod, Product, SaleResult, TodaySalesSummary,
};
use crate::orchestrator::{CheckoutState, SaleOrchestrator};
use crate::services::{CatalogService, SalesService};
use crate::validation;

/// Search queries shorter than this are not dispatched to the server; the
/// previous snapshot stays on display.
const SEARCH_MIN_CHARS: usize = 3;

pub struct PosTerminal<C, S> {
    catalog_service: C,
    sales_service: S,
    catalog: CatalogIndex,
    cart: Cart,
    orchestrator: SaleOrchestrator,
    dashboard: DashboardAggregator,
    low_stock_threshold: i64,
}

impl<C, S> PosTerminal<C, S>
where
    C: CatalogService,
    S: SalesService,
{
    pub fn new(catalog_service: C, sales_service: S, low_stock_threshold: i64) -> Self {
        Self {
            catalog_service,
            sales_service,
            catalog: CatalogIndex::new(),
            cart: Cart::new(),
            orchestrator: SaleOrchestrator::new(),
            dashboard: DashboardAggregator::new(),
            low_stock_threshold,
        }
    }

    /// Initial load: catalog plus dashboard. A stats failure is non-fatal;
    /// the dashboard simply starts empty.
    pub async fn start(&mut self) -> Result<(), PosError> {
        self.catalog.load(&self.catalog_service).await?;
        if let Err(e) = self.dashboard.refresh(&self.sales_service).await {
            log_warn!("TERMINAL", &format!("Initial dashboard load failed: {}", e));
        }
        Ok(())
    }

    /// Search-box policy: dispatch a server search only once the query has
    /// more than 2 characters; an emptied query reloads the full catalog;
    /// 1-2 character queries leave the current snapshot untouched.
    pub async fn handle_search_input(&mut self, query: &str) -> Result<(), PosError> {
        if query.is_empty() {
            return self.catalog.load(&self.catalog_service).await;
        }
        if query.len() < SEARCH_MIN_CHARS {
            return Ok(());
        }
        self.catalog.search(&self.catalog_service, query).await
    }

    /// Adds one unit of a displayed product to the cart, capturing the price
    /// snapshot. Returns false for an id not in the current snapshot.
    pub fn add_to_cart(&mut self, product_id: i64) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                let snapshot = product.clone();
                self.cart.add_item(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Explicit operator action; distinct from the post-sale clear owned by
    /// the orchestrator.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Opens checkout with a chosen payment method, returning the frozen
    /// display total.
    pub fn begin_checkout(&mut self, payment_method: PaymentMethod) -> Result<f64, PosError> {
        self.orchestrator.begin_checkout(&self.cart, payment_method)
    }

    pub fn cancel_checkout(&mut self) -> Result<(), PosError> {
        self.orchestrator.cancel()
    }

    /// Confirms the open checkout: submits exactly once and reconciles
    /// (clear cart, reload catalog, reload dashboard) on success.
    pub async fn confirm_sale(&mut self) -> Result<SaleResult, PosError> {
        self.orchestrator
            .confirm(
                &mut self.cart,
                &mut self.catalog,
                &mut self.dashboard,
                &self.catalog_service,
                &self.sales_service,
            )
            .await
    }

    pub fn checkout_state(&self) -> &CheckoutState {
        self.orchestrator.state()
    }

    pub fn last_sale(&self) -> Option<&SaleResult> {
        self.orchestrator.last_sale()
    }

    pub async fn refresh_dashboard(&mut self) -> Result<&DashboardStats, PosError> {
        self.dashboard.refresh(&self.sales_service).await
    }

    pub async fn today_summary(&self) -> Result<TodaySalesSummary, PosError> {
        self.dashboard.today_summary(&self.sales_service).await
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.dashboard.stats()
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Display hint for the product grid; never gates submission.
    pub fn is_low_stock(&self, product: &Product) -> bool {
        product.is_low_stock(self.low_stock_threshold)
    }

    /// Server-side low-stock listing for the inventory view. Does not touch
    /// the displayed snapshot.
    pub async fn low_stock_products(&self) -> Result<Vec<Product>, PosError> {
        self.catalog_service.low_stock_products().await
    }

    /// Creates a product and reloads the catalog so the new item shows up.
    pub async fn create_product(
        &mut self,
        payload: CreateProductPayload,
    ) -> Result<Product, PosError> {
        validation::validate_create_product(&payload).map_err(PosError::InvalidInput)?;
        let product = self.catalog_service.create_product(&payload).await?;
        self.catalog.load(&self.catalog_service).await?;
        Ok(product)
    }

    /// Patches one product's stock count and reloads the catalog.
    pub async fn update_stock(
        &mut self,
        product_id: i64,
        stock_quantity: i64,
    ) -> Result<Product, PosError> {
        validation::validate_quantity(stock_quantity, None, None).map_err(PosError::InvalidInput)?;
        let product = self
            .catalog_service
            .update_stock(product_id, stock_quantity)
            .await?;
        self.catalog.load(&self.catalog_service).await?;
        Ok(product)
    }
}
