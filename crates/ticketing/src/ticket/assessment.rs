//! Validation and pricing of a purchase request.

use common::AccountId;
use serde::Serialize;

use crate::error::{InvalidPurchase, Result};

use super::{PurchasePolicy, TicketCounts, TicketTypeRequest};

/// A purchase that passed every rule, with its derived price and seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    account_id: AccountId,
    counts: TicketCounts,
    total_price: u64,
    total_seats: u64,
}

impl PurchaseOrder {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Ticket totals per category.
    pub fn counts(&self) -> &TicketCounts {
        &self.counts
    }

    /// Amount to charge the account.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Number of seats to reserve for the account.
    pub fn total_seats(&self) -> u64 {
        self.total_seats
    }
}

/// Validates a purchase request and computes what to charge and reserve.
///
/// Rules are checked in order and the first failure is returned:
/// 1. The account ID is a positive integer.
/// 2. Every request asks for at least one ticket.
/// 3. The total ticket count is within the policy's limit.
/// 4. At least one adult ticket is requested.
/// 5. There are no more infants than adults.
///
/// Counts of the same category are summed across requests. Infants are
/// free and do not get a seat.
pub fn assess_purchase(
    account_id: u64,
    requests: &[TicketTypeRequest],
    policy: &PurchasePolicy,
) -> Result<PurchaseOrder> {
    let account_id = AccountId::new(account_id).ok_or(InvalidPurchase::InvalidAccountId)?;

    for (index, request) in requests.iter().enumerate() {
        if request.count() < 1 {
            return Err(InvalidPurchase::TicketCountBelowMinimum {
                index,
                category: request.category(),
                count: i64::from(request.count()),
            });
        }
    }

    let counts = TicketCounts::from_requests(requests);
    tracing::debug!(
        adults = counts.adults,
        children = counts.children,
        infants = counts.infants,
        "aggregated ticket requests"
    );

    let requested = counts.total();
    if requested > u64::from(policy.max_tickets()) {
        return Err(InvalidPurchase::TooManyTickets {
            requested,
            max: policy.max_tickets(),
        });
    }

    if counts.adults < 1 {
        return Err(InvalidPurchase::NoAdultTicket);
    }

    if counts.infants > counts.adults {
        return Err(InvalidPurchase::TooManyInfants {
            adults: counts.adults,
            infants: counts.infants,
        });
    }

    Ok(PurchaseOrder {
        account_id,
        counts,
        total_price: policy.prices().total_price(&counts),
        total_seats: counts.seats(),
    })
}
