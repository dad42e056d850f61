//! Ticket purchasing for a venue.
//!
//! [`TicketService`] validates a purchase request against the
//! [`PurchasePolicy`](ticketing::PurchasePolicy), charges the account through
//! a [`PaymentService`] and then reserves seats through a
//! [`SeatReservationService`]. Either both collaborators are called, in that
//! order, or neither is.

pub mod config;
pub mod service;
pub mod services;

pub use config::PurchaseConfig;
pub use service::TicketService;
pub use services::{
    InMemoryPaymentService, InMemorySeatReservationService, PaymentService,
    SeatReservationService,
};
pub use ticketing::{
    InvalidPurchase, PurchaseOrder, ServiceError, TicketCategory, TicketTypeRequest,
};
