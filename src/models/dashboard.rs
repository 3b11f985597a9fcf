use serde::Deserialize;

use super::de;
use super::sale::SaleResult;

/// Precomputed aggregates from the Sales Service. The client displays these
/// as-is and never derives revenue or counts on its own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub today_sales: i64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub today_revenue: f64,
    #[serde(default)]
    pub week_sales: i64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub week_revenue: f64,
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub low_stock_products: i64,
}

/// Summary object from the today_sales endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TodaySalesSummary {
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default, deserialize_with = "de::decimal")]
    pub total_revenue: f64,
    #[serde(default)]
    pub sales: Vec<SaleResult>,
}
