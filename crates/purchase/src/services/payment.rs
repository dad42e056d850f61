//! Payment service trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use common::AccountId;
use ticketing::ServiceError;

/// Trait for charging an account.
///
/// Payments are expected to always succeed; an `Err` is treated as an
/// unexpected fault and fails the purchase.
pub trait PaymentService: Send + Sync {
    /// Charges `amount` to the account.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError>;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<(AccountId, u64)>,
    fail_on_payment: bool,
}

/// In-memory payment service that records every charge.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail every payment.
    pub fn set_fail_on_payment(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_payment = fail;
    }

    /// Returns the number of payments taken.
    pub fn payment_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .len()
    }

    /// Returns every payment taken, oldest first.
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .clone()
    }

    /// Returns the sum charged to one account.
    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .payments
            .iter()
            .filter(|(id, _)| *id == account_id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl PaymentService for InMemoryPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_payment {
            return Err(ServiceError::new("Payment declined"));
        }

        tracing::debug!(%account_id, amount, "payment taken");
        state.payments.push((account_id, amount));
        Ok(())
    }
}
