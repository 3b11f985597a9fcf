use serde::{Deserialize, Serialize};

use super::de;

/// Point-in-time catalog snapshot of one product. Owned by the Catalog
/// Service; the terminal never mutates it and stock may be stale by the time
/// a sale is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::decimal")]
    pub price: f64,
    pub stock_quantity: i64,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Display hint only. Never gates submission; the authoritative stock
    /// check happens server-side at commit time.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock_quantity < threshold
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity <= 0
    }
}

/// Payload for creating a product (id assigned by the server).
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Partial update sent via PATCH; only the stock field is patched.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStockPayload {
    pub stock_quantity: i64,
}

/// Product list responses arrive either as a bare array or wrapped in the
/// server's pagination envelope `{count, next, previous, results}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductListResponse {
    Paginated(ProductPage),
    Plain(Vec<Product>),
}

#[derive(Debug, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Product>,
}

impl ProductListResponse {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductListResponse::Paginated(page) => page.results,
            ProductListResponse::Plain(products) => products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_deserializes_from_decimal_string() {
        let json = r#"{"id": 1, "name": "Monitor", "price": "300.50", "stock_quantity": 20}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 300.50);
    }

    #[test]
    fn price_deserializes_from_number() {
        let json = r#"{"id": 1, "name": "Monitor", "price": 300.5, "stock_quantity": 20}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 300.50);
    }

    #[test]
    fn list_deserializes_from_bare_array() {
        let json = r#"[{"id": 1, "name": "Mouse", "price": "25.00", "stock_quantity": 5}]"#;
        let list: ProductListResponse = serde_json::from_str(json).unwrap();
        let products = list.into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mouse");
    }

    #[test]
    fn list_deserializes_from_pagination_envelope() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "name": "Laptop", "price": "1200.00", "stock_quantity": 50},
                {"id": 2, "name": "Mouse", "price": "25.00", "stock_quantity": 5}
            ]
        }"#;
        let list: ProductListResponse = serde_json::from_str(json).unwrap();
        let products = list.into_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 1200.0);
    }

    #[test]
    fn stock_badges_are_threshold_based() {
        let json = r#"{"id": 2, "name": "Mouse", "price": "25.00", "stock_quantity": 5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_low_stock(10));
        assert!(!product.is_low_stock(5));
        assert!(!product.is_out_of_stock());
    }
}
