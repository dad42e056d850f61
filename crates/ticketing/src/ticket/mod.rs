//! Ticket requests, pricing policy and purchase assessment.

mod assessment;
mod policy;
mod value_objects;

pub use assessment::{PurchaseOrder, assess_purchase};
pub use policy::{
    DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE, DEFAULT_MAX_TICKETS, PriceTable, PurchasePolicy,
};
pub use value_objects::{TicketCategory, TicketCounts, TicketTypeRequest, UnknownCategory};
