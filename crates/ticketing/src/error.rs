//! Purchase error types.

use thiserror::Error;

use crate::ticket::TicketCategory;

/// The single failure kind raised by a ticket purchase.
///
/// Every rejected purchase surfaces as this type, whichever rule failed.
/// The variant says which rule it was and the `Display` text describes it.
#[derive(Debug, Error)]
pub enum InvalidPurchase {
    /// The account identifier is not a positive integer.
    #[error("Invalid account ID: must be a positive integer")]
    InvalidAccountId,

    /// A request item is not a well-formed ticket type request.
    #[error("Invalid ticket request at position {index}: {reason}")]
    MalformedRequest { index: usize, reason: String },

    /// A request item asks for fewer than one ticket.
    #[error(
        "Invalid ticket request at position {index}: {category} tickets must request a minimum of 1 ticket (got {count})"
    )]
    TicketCountBelowMinimum {
        index: usize,
        category: TicketCategory,
        count: i64,
    },

    /// The aggregate ticket count is above the configured limit.
    #[error("Cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets { requested: u64, max: u32 },

    /// The aggregate contains no adult ticket.
    #[error("Purchase must include at least 1 adult ticket")]
    NoAdultTicket,

    /// More infants than adults in the aggregate.
    #[error(
        "There must be at least 1 adult per infant (requested {adults} adult and {infants} infant tickets)"
    )]
    TooManyInfants { adults: u64, infants: u64 },

    /// The payment collaborator faulted.
    #[error("Payment failed: {0}")]
    PaymentFailed(#[source] ServiceError),

    /// The seat reservation collaborator faulted.
    #[error("Seat reservation failed: {0}")]
    SeatReservationFailed(#[source] ServiceError),
}

impl InvalidPurchase {
    /// Short machine-readable label for the failed rule, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccountId => "invalid_account_id",
            InvalidPurchase::MalformedRequest { .. } => "malformed_request",
            InvalidPurchase::TicketCountBelowMinimum { .. } => "below_minimum",
            InvalidPurchase::TooManyTickets { .. } => "too_many_tickets",
            InvalidPurchase::NoAdultTicket => "no_adult_ticket",
            InvalidPurchase::TooManyInfants { .. } => "too_many_infants",
            InvalidPurchase::PaymentFailed(_) => "payment_failed",
            InvalidPurchase::SeatReservationFailed(_) => "seat_reservation_failed",
        }
    }
}

/// A fault reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Creates a collaborator error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the collaborator's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building a purchase policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Paid categories must have a positive unit price.
    #[error("Invalid price for {category} tickets: must be greater than 0")]
    ZeroPrice { category: TicketCategory },
}

/// Convenience type alias for purchase results.
pub type Result<T> = std::result::Result<T, InvalidPurchase>;
