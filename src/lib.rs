//! Cart-to-sale transaction core for a retail POS terminal.
//!
//! The terminal is a thin client over two remote HTTP/JSON services: a
//! Catalog Service (product lookup, search, stock) and a Sales Service
//! (sale submission, dashboard aggregation). Everything stateful in this
//! crate lives in memory for one operator session: the catalog snapshot,
//! the cart, the checkout state machine, and the last-fetched dashboard
//! numbers. Stock correctness at commit time is enforced server-side; the
//! client only does best-effort display and pre-submission validation.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod terminal;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use cart::{Cart, CartLine};
pub use catalog::CatalogIndex;
pub use checkout::{compute_total, validate_for_checkout, ValidatedCart};
pub use config::AppConfig;
pub use dashboard::DashboardAggregator;
pub use errors::{PosError, ValidationError};
pub use models::{DashboardStats, PaymentMethod, Product, SaleRequest, SaleResult};
pub use orchestrator::{CheckoutState, SaleOrchestrator};
pub use services::{
    ApiClient, CatalogService, HttpCatalogService, HttpSalesService, SalesService,
};
pub use terminal::PosTerminal;

use std::path::Path;

/// Wires a terminal against the HTTP services described by the
/// configuration. Initializes the global logger on first call.
pub fn build_terminal(
    config: &AppConfig,
    data_dir: Option<&Path>,
) -> Result<PosTerminal<HttpCatalogService, HttpSalesService>, PosError> {
    config
        .validate()
        .map_err(PosError::InvalidInput)?;

    if let Err(e) = logger::init_global_logger(&config.logging, data_dir) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    let client = ApiClient::new(&config.api)?;
    let catalog_service = HttpCatalogService::new(client.clone());
    let sales_service = HttpSalesService::new(client);

    Ok(PosTerminal::new(
        catalog_service,
        sales_service,
        config.inventory.low_stock_threshold,
    ))
}

/// Convenience entry point: resolves the global configuration from the
/// environment and builds a terminal from it.
pub fn build_terminal_from_env(
    data_dir: Option<&Path>,
) -> Result<PosTerminal<HttpCatalogService, HttpSalesService>, PosError> {
    let config = config::init_config();
    build_terminal(config, data_dir)
}
