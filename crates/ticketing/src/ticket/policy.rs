//! Pricing and ticket-limit policy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::{TicketCategory, TicketCounts};

/// Maximum number of tickets in a single purchase unless configured otherwise.
pub const DEFAULT_MAX_TICKETS: u32 = 25;

/// Adult unit price unless configured otherwise.
pub const DEFAULT_ADULT_PRICE: u32 = 25;

/// Child unit price unless configured otherwise.
pub const DEFAULT_CHILD_PRICE: u32 = 15;

/// Unit price per ticket category. Infant tickets are always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    adult: u32,
    child: u32,
}

impl PriceTable {
    /// Creates a price table. Adult and child prices must be positive.
    pub fn new(adult: u32, child: u32) -> Result<Self, ConfigError> {
        if adult == 0 {
            return Err(ConfigError::ZeroPrice {
                category: TicketCategory::Adult,
            });
        }
        if child == 0 {
            return Err(ConfigError::ZeroPrice {
                category: TicketCategory::Child,
            });
        }
        Ok(Self { adult, child })
    }

    /// Returns the unit price of a category.
    pub fn unit_price(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => 0,
        }
    }

    /// Returns the total price of the given tickets, saturating at `u64::MAX`.
    pub fn total_price(&self, counts: &TicketCounts) -> u64 {
        TicketCategory::ALL.iter().fold(0u64, |total, category| {
            let unit_price = u64::from(self.unit_price(*category));
            total.saturating_add(counts.get(*category).saturating_mul(unit_price))
        })
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: DEFAULT_ADULT_PRICE,
            child: DEFAULT_CHILD_PRICE,
        }
    }
}

/// The rules a purchase is checked against: the ticket limit and the prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    max_tickets: u32,
    prices: PriceTable,
}

impl PurchasePolicy {
    /// Creates a policy with the given ticket limit and prices.
    pub fn new(max_tickets: u32, prices: PriceTable) -> Self {
        Self {
            max_tickets,
            prices,
        }
    }

    /// Maximum number of tickets allowed in one purchase.
    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS, PriceTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let prices = PriceTable::default();
        assert_eq!(prices.unit_price(TicketCategory::Adult), 25);
        assert_eq!(prices.unit_price(TicketCategory::Child), 15);
        assert_eq!(prices.unit_price(TicketCategory::Infant), 0);
    }

    #[test]
    fn test_zero_prices_rejected() {
        assert_eq!(
            PriceTable::new(0, 10),
            Err(ConfigError::ZeroPrice {
                category: TicketCategory::Adult
            })
        );
        assert_eq!(
            PriceTable::new(20, 0),
            Err(ConfigError::ZeroPrice {
                category: TicketCategory::Child
            })
        );
    }

    #[test]
    fn test_total_price_ignores_infants() {
        let prices = PriceTable::new(20, 10).unwrap();
        let counts = TicketCounts {
            adults: 2,
            children: 3,
            infants: 2,
        };
        assert_eq!(prices.total_price(&counts), 70);
    }

    #[test]
    fn test_total_price_does_not_overflow() {
        let prices = PriceTable::new(u32::MAX, u32::MAX).unwrap();
        let counts = TicketCounts {
            adults: u64::from(u32::MAX),
            children: 0,
            infants: 0,
        };
        assert_eq!(
            prices.total_price(&counts),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_default_policy() {
        let policy = PurchasePolicy::default();
        assert_eq!(policy.max_tickets(), DEFAULT_MAX_TICKETS);
        assert_eq!(*policy.prices(), PriceTable::default());
    }
}
