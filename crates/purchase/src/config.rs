//! Purchase configuration loaded from environment variables.

use ticketing::{
    ConfigError, DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE, DEFAULT_MAX_TICKETS, PriceTable,
    PurchasePolicy,
};

/// Ticket limit and prices with sensible defaults.
///
/// Reads from environment variables:
/// - `MAX_TICKETS`: ceiling on tickets per purchase (default: `25`)
/// - `ADULT_TICKET_PRICE`: adult unit price (default: `25`)
/// - `CHILD_TICKET_PRICE`: child unit price (default: `15`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseConfig {
    pub max_tickets: u32,
    pub adult_price: u32,
    pub child_price: u32,
}

impl PurchaseConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values. Zero prices fall back too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u32>().ok());

        Self {
            max_tickets: read("MAX_TICKETS").unwrap_or(DEFAULT_MAX_TICKETS),
            adult_price: read("ADULT_TICKET_PRICE")
                .filter(|price| *price > 0)
                .unwrap_or(DEFAULT_ADULT_PRICE),
            child_price: read("CHILD_TICKET_PRICE")
                .filter(|price| *price > 0)
                .unwrap_or(DEFAULT_CHILD_PRICE),
        }
    }

    /// Builds the purchase policy described by this configuration.
    pub fn policy(&self) -> Result<PurchasePolicy, ConfigError> {
        let prices = PriceTable::new(self.adult_price, self.child_price)?;
        Ok(PurchasePolicy::new(self.max_tickets, prices))
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            adult_price: DEFAULT_ADULT_PRICE,
            child_price: DEFAULT_CHILD_PRICE,
        }
    }
}
