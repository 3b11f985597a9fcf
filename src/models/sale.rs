use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable sale payload, snapshotted from the cart at confirmation.
///
/// The backend expects product_id and quantity as strings; this wire shape is
/// a compatibility contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRequest {
    pub items: Vec<SaleRequestItem>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRequestItem {
    pub product_id: String,
    pub quantity: String,
}

impl SaleRequestItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

/// Server-confirmed sale record, used only for receipt display. Fields are
/// deliberately lenient: its absence or partial shape must never affect the
/// cart.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleResult {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleResultItem>,
}

/// One confirmed line item. The create endpoint may echo the request shape
/// (`product_id` as a string) instead of the full read serializer, so both
/// spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleResultItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product: Option<i64>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub total_price: Option<f64>,
}
