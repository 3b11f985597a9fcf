//! Pricing & validation engine: the single place where a cart is priced and
//! turned into a sale payload, so the checkout display and the submitted
//! request can never disagree.

use crate::cart::Cart;
use crate::errors::ValidationError;
use crate::models::{PaymentMethod, SaleRequest, SaleRequestItem};

/// A cart that passed checkout validation, reduced to the (product_id,
/// quantity) pairs a SaleRequest needs plus the frozen display total.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCart {
    lines: Vec<(i64, i64)>,
    total: f64,
}

impl ValidatedCart {
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn lines(&self) -> &[(i64, i64)] {
        &self.lines
    }

    /// Builds the wire payload. Only reachable through validation, so an
    /// empty or invalid cart can never produce a SaleRequest.
    pub fn build_request(&self, payment_method: PaymentMethod) -> SaleRequest {
        SaleRequest {
            items: self
                .lines
                .iter()
                .map(|&(product_id, quantity)| SaleRequestItem::new(product_id, quantity))
                .collect(),
            payment_method,
        }
    }
}

/// Rejects empty carts and structurally impossible quantities. Live stock is
/// deliberately not re-verified here; the Sales Service is the single source
/// of truth for stock at commit time.
pub fn validate_for_checkout(cart: &Cart) -> Result<ValidatedCart, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    for line in cart.lines() {
        if line.quantity <= 0 {
            return Err(ValidationError::InvalidLine(line.product.id));
        }
    }

    Ok(ValidatedCart {
        lines: cart
            .lines()
            .iter()
            .map(|l| (l.product.id, l.quantity))
            .collect(),
        total: compute_total(cart),
    })
}

/// Same formula as `Cart::total`, exposed so the checkout UI and the
/// submission payload agree bit-for-bit.
pub fn compute_total(cart: &Cart) -> f64 {
    cart.total()
}
