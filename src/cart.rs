use serde::Serialize;

use crate::models::Product;

/// One product snapshot paired with a positive quantity. The price is the
/// snapshot price captured at add-time and is not re-fetched before
/// submission; the server recomputes the authoritative total at commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// The operator's in-progress, unsubmitted collection of line items.
///
/// Invariants: at most one line per product id (merge-on-add), every quantity
/// >= 1 (a line reaching 0 is removed), insertion order preserved for
/// display. Exists only in memory; no operation here performs I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge-on-add: an existing line for the same product id gets
    /// quantity += 1; otherwise a new line is appended with quantity 1 and
    /// the product snapshot captured at this instant.
    pub fn add_item(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Quantities <= 0 remove the line entirely. No stock check here: the
    /// cart may transiently exceed available stock while the operator edits
    /// it; stock is enforced server-side at submission.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.product.id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove_item(&mut self, product_id: i64) {
        self.set_quantity(product_id, 0);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Computed fresh on every read, never cached.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
