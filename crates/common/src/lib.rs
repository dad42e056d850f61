//! Shared types for the ticket purchase engine.

mod types;

pub use types::AccountId;
