//! Sale submission orchestrator.
//!
//! State machine: Idle → Confirming → Submitting → {Succeeded, Failed}.
//! Succeeded collapses back to Idle with the confirmed sale recorded; Failed
//! keeps the chosen payment method so an operator-initiated retry rebuilds a
//! fresh request without re-opening checkout. Exactly one submission may be
//! in flight; concurrent attempts are rejected, never queued.

use crate::cart::Cart;
use crate::catalog::CatalogIndex;
use crate::checkout;
use crate::dashboard::DashboardAggregator;
use crate::errors::PosError;
use crate::models::{PaymentMethod, SaleRequest, SaleResult};
use crate::services::{CatalogService, SalesService};
use crate::{log_info, log_warn};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Idle,
    /// Checkout opened: the total shown to the operator is frozen for
    /// display, but the cart underneath stays mutable until Submitting.
    Confirming {
        payment_method: PaymentMethod,
        display_total: f64,
    },
    Submitting {
        payment_method: PaymentMethod,
    },
    /// Last submission failed; cart preserved, retry is operator-initiated.
    Failed {
        payment_method: PaymentMethod,
        error: String,
    },
}

impl CheckoutState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutState::Submitting { .. })
    }
}

#[derive(Debug, Default)]
pub struct SaleOrchestrator {
    state: CheckoutState,
    last_sale: Option<SaleResult>,
}

impl Default for CheckoutState {
    fn default() -> Self {
        CheckoutState::Idle
    }
}

impl SaleOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The last server-confirmed sale, for receipt display.
    pub fn last_sale(&self) -> Option<&SaleResult> {
        self.last_sale.as_ref()
    }

    /// Idle → Confirming. Validates the cart and freezes the display total.
    pub fn begin_checkout(
        &mut self,
        cart: &Cart,
        payment_method: PaymentMethod,
    ) -> Result<f64, PosError> {
        if self.state.is_submitting() {
            return Err(PosError::SubmissionInProgress);
        }

        let validated = checkout::validate_for_checkout(cart)?;
        let display_total = validated.total();
        self.state = CheckoutState::Confirming {
            payment_method,
            display_total,
        };
        Ok(display_total)
    }

    /// Confirming/Failed → Idle, with no side effects on the cart or stock.
    pub fn cancel(&mut self) -> Result<(), PosError> {
        if self.state.is_submitting() {
            return Err(PosError::SubmissionInProgress);
        }
        self.state = CheckoutState::Idle;
        Ok(())
    }

    /// Atomically snapshots the cart into a SaleRequest and enters
    /// Submitting. This is the single-flight gate: while Submitting, any
    /// further attempt fails synchronously with `SubmissionInProgress`.
    /// The returned request is isolated from later cart mutations.
    pub(crate) fn take_in_flight(&mut self, cart: &Cart) -> Result<SaleRequest, PosError> {
        let payment_method = match &self.state {
            CheckoutState::Submitting { .. } => return Err(PosError::SubmissionInProgress),
            CheckoutState::Confirming { payment_method, .. }
            | CheckoutState::Failed { payment_method, .. } => *payment_method,
            CheckoutState::Idle => {
                return Err(PosError::InvalidInput(
                    "Checkout has not been opened".to_string(),
                ))
            }
        };

        // Rebuilt freshly on every attempt: a retry after failure must
        // reflect the cart as it stands now, not the failed snapshot.
        let request = checkout::validate_for_checkout(cart)?.build_request(payment_method);
        self.state = CheckoutState::Submitting { payment_method };
        Ok(request)
    }

    /// Confirming → Submitting → {Succeeded, Failed}.
    ///
    /// On success, in order: clear the cart, reload the catalog (stock
    /// changed), reload the dashboard. The reload failures are non-fatal
    /// warnings; the sale already committed server-side and is never rolled
    /// back. On failure the cart is preserved unchanged.
    pub async fn confirm<C, S>(
        &mut self,
        cart: &mut Cart,
        catalog: &mut CatalogIndex,
        dashboard: &mut DashboardAggregator,
        catalog_service: &C,
        sales_service: &S,
    ) -> Result<SaleResult, PosError>
    where
        C: CatalogService,
        S: SalesService,
    {
        // 1. Snapshot the cart and enter Submitting (single-flight gate)
        let request = self.take_in_flight(cart)?;
        let payment_method = request.payment_method;

        log_info!(
            "SALE",
            "Submitting sale",
            serde_json::json!({
                "lines": request.items.len(),
                "payment_method": payment_method.as_str(),
            })
        );

        // 2. Submit exactly once for this confirmation
        match sales_service.submit_sale(&request).await {
            Ok(result) => {
                // 3. Reconcile: clear cart first, then refresh collaborators
                cart.clear();

                if let Err(e) = catalog.load(catalog_service).await {
                    log_warn!("SALE", &format!("Post-sale catalog reload failed: {}", e));
                }
                if let Err(e) = dashboard.refresh(sales_service).await {
                    log_warn!("SALE", &format!("Post-sale dashboard reload failed: {}", e));
                }

                log_info!(
                    "SALE",
                    "Sale completed",
                    serde_json::json!({
                        "receipt_number": result.receipt_number,
                        "total_amount": result.total_amount,
                    })
                );

                self.state = CheckoutState::Idle;
                self.last_sale = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                log_warn!("SALE", &format!("Sale submission failed: {}", err));
                self.state = CheckoutState::Failed {
                    payment_method,
                    error: err.to_string(),
                };
                Err(err)
            }
        }
    }
}
