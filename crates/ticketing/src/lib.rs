//! Domain layer for ticket purchases.
//!
//! This crate holds the purchase rules and nothing that talks to the outside
//! world:
//! - Ticket categories and per-category request values
//! - The per-call aggregate of requested tickets
//! - The pricing and ticket-limit policy
//! - `assess_purchase`, which validates a request set and derives the price
//!   and seat count to hand to the collaborators
//! - `raw`, the boundary that turns untyped JSON input into typed requests

pub mod error;
pub mod raw;
pub mod ticket;

pub use error::{ConfigError, InvalidPurchase, Result, ServiceError};
pub use ticket::{
    DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE, DEFAULT_MAX_TICKETS, PriceTable, PurchaseOrder,
    PurchasePolicy, TicketCategory, TicketCounts, TicketTypeRequest, UnknownCategory,
    assess_purchase,
};
