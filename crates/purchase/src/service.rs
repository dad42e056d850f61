//! Ticket service: the purchase entry point.

use serde_json::Value;
use ticketing::{
    ConfigError, InvalidPurchase, PurchaseOrder, PurchasePolicy, Result, TicketCategory,
    TicketTypeRequest, assess_purchase, raw,
};

use crate::config::PurchaseConfig;
use crate::services::{PaymentService, SeatReservationService};

/// Validates ticket purchases and hands them to the payment and seat
/// reservation services.
///
/// The service holds no per-purchase state, so one instance can serve
/// concurrent purchases from several threads.
pub struct TicketService<P, R>
where
    P: PaymentService,
    R: SeatReservationService,
{
    policy: PurchasePolicy,
    payment: P,
    seats: R,
}

impl<P, R> TicketService<P, R>
where
    P: PaymentService,
    R: SeatReservationService,
{
    /// Creates a ticket service with the given policy and collaborators.
    pub fn new(policy: PurchasePolicy, payment: P, seats: R) -> Self {
        Self {
            policy,
            payment,
            seats,
        }
    }

    /// Creates a ticket service from configuration.
    pub fn from_config(
        config: &PurchaseConfig,
        payment: P,
        seats: R,
    ) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(config.policy()?, payment, seats))
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validates a purchase and returns its price and seat count without
    /// charging or reserving anything.
    pub fn quote(&self, account_id: u64, requests: &[TicketTypeRequest]) -> Result<PurchaseOrder> {
        assess_purchase(account_id, requests, &self.policy)
    }

    /// Purchases tickets for an account.
    ///
    /// On success the account has been charged once and the seats reserved
    /// once, in that order. On failure nothing has been charged or reserved,
    /// unless the seat reservation itself faulted after payment.
    #[tracing::instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn purchase_tickets(
        &self,
        account_id: u64,
        requests: &[TicketTypeRequest],
    ) -> Result<()> {
        self.observe(|| self.execute(account_id, requests))
    }

    /// Purchases tickets from untyped input.
    ///
    /// The account ID must be a positive JSON integer and each request an
    /// object like `{"type": "ADULT", "noOfTickets": 2}`. Anything else fails
    /// with the same error type as [`purchase_tickets`](Self::purchase_tickets).
    #[tracing::instrument(skip(self, requests), fields(request_count = requests.len()))]
    pub fn purchase_raw(&self, account_id: &Value, requests: &[Value]) -> Result<()> {
        self.observe(|| {
            let account_id = raw::parse_account_id(account_id)?;
            let requests = raw::parse_ticket_requests(requests)?;
            self.execute(account_id, &requests)
        })
    }

    fn execute(&self, account_id: u64, requests: &[TicketTypeRequest]) -> Result<()> {
        let order = assess_purchase(account_id, requests, &self.policy)?;

        self.payment
            .make_payment(order.account_id(), order.total_price())
            .map_err(InvalidPurchase::PaymentFailed)?;
        self.seats
            .reserve_seats(order.account_id(), order.total_seats())
            .map_err(InvalidPurchase::SeatReservationFailed)?;

        for category in TicketCategory::ALL {
            metrics::counter!("tickets_sold_total", "category" => category.as_str())
                .increment(order.counts().get(category));
        }
        metrics::histogram!("ticket_purchase_amount").record(order.total_price() as f64);

        tracing::info!(
            total_price = order.total_price(),
            total_seats = order.total_seats(),
            "tickets purchased"
        );
        Ok(())
    }

    fn observe(&self, purchase: impl FnOnce() -> Result<()>) -> Result<()> {
        metrics::counter!("ticket_purchase_attempts_total").increment(1);

        let result = purchase();
        if let Err(err) = &result {
            tracing::warn!(reason = err.kind(), error = %err, "ticket purchase rejected");
            metrics::counter!("ticket_purchases_rejected_total", "reason" => err.kind())
                .increment(1);
        }
        result
    }
}
