pub mod dashboard;
pub mod product;
pub mod sale;

pub use dashboard::{DashboardStats, TodaySalesSummary};
pub use product::{CreateProductPayload, Product, ProductListResponse, UpdateStockPayload};
pub use sale::{PaymentMethod, SaleRequest, SaleRequestItem, SaleResult, SaleResultItem};

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    /// Accepts either a JSON number or a decimal string ("300.50").
    /// The backend serializes DecimalField values as strings, but falls back
    /// to a literal 0 when an aggregate has no rows.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimalish {
        Num(f64),
        Str(String),
    }

    pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Decimalish::deserialize(deserializer)? {
            Decimalish::Num(n) => Ok(n),
            Decimalish::Str(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        }
    }

    /// Accepts either a JSON integer or a stringified integer ("2").
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Intish {
        Num(i64),
        Str(String),
    }

    pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Intish>::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(Intish::Num(n)) => Ok(Some(n)),
            Some(Intish::Str(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }

    pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Decimalish>::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(Decimalish::Num(n)) => Ok(Some(n)),
            Some(Decimalish::Str(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
