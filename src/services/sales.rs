//! Sales Service contract: sale submission and precomputed aggregates.

use async_trait::async_trait;

use super::{describe_transport_error, extract_error_detail, ApiClient};
use crate::errors::PosError;
use crate::models::{DashboardStats, SaleRequest, SaleResult, TodaySalesSummary};

#[async_trait]
pub trait SalesService {
    /// Submits one sale atomically. The server is the single source of truth
    /// for stock at commit time: a business rejection (insufficient stock,
    /// bad payment method) maps to `SaleRejected`, transport failures and
    /// server errors to `SaleTransport`.
    async fn submit_sale(&self, request: &SaleRequest) -> Result<SaleResult, PosError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, PosError>;

    async fn today_sales(&self) -> Result<TodaySalesSummary, PosError>;
}

/// HTTP implementation against the /sales/ endpoints.
#[derive(Debug, Clone)]
pub struct HttpSalesService {
    client: ApiClient,
}

impl HttpSalesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SalesService for HttpSalesService {
    async fn submit_sale(&self, request: &SaleRequest) -> Result<SaleResult, PosError> {
        let response = self
            .client
            .post("/sales/")
            .json(request)
            .send()
            .await
            .map_err(|e| PosError::SaleTransport(describe_transport_error(&e)))?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::SaleRejected(extract_error_detail(&body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::SaleTransport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PosError::SaleTransport(format!("Malformed sale result: {}", e)))
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, PosError> {
        let response = self
            .client
            .get("/sales/dashboard_stats/")
            .send()
            .await
            .map_err(|e| PosError::AggregationUnavailable(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::AggregationUnavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PosError::AggregationUnavailable(format!("Malformed stats: {}", e)))
    }

    async fn today_sales(&self) -> Result<TodaySalesSummary, PosError> {
        let response = self
            .client
            .get("/sales/today_sales/")
            .send()
            .await
            .map_err(|e| PosError::AggregationUnavailable(describe_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PosError::AggregationUnavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                extract_error_detail(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PosError::AggregationUnavailable(format!("Malformed summary: {}", e)))
    }
}
