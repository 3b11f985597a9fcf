use thiserror::Error;

/// Local checkout validation failures. Never sent over the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid quantity for product {0}")]
    InvalidLine(i64),
}

#[derive(Error, Debug)]
pub enum PosError {
    /// Catalog load/search failed; the previous snapshot stays displayed.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reentrancy guard: a submission is already in flight.
    #[error("A sale submission is already in progress")]
    SubmissionInProgress,

    /// Server-side business rejection (e.g. stock conflict). Cart preserved.
    #[error("Sale rejected: {0}")]
    SaleRejected(String),

    /// Network, timeout, or 5xx during submission. Cart preserved.
    #[error("Sale submission failed: {0}")]
    SaleTransport(String),

    /// Dashboard fetch failed; stats stay stale.
    #[error("Dashboard stats unavailable: {0}")]
    AggregationUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<PosError> for String {
    fn from(err: PosError) -> String {
        err.to_string()
    }
}
