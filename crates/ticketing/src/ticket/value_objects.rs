//! Value objects for the ticket domain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a ticket.
///
/// The set is closed: every ticket is for an adult, a child or an infant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories, in pricing order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }

    /// Returns true if tickets of this category occupy a seat.
    ///
    /// Infants sit on an accompanying adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a category name that is not ADULT, CHILD or INFANT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ticket type `{0}`")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for TicketCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketCategory::Adult),
            "CHILD" => Ok(TicketCategory::Child),
            "INFANT" => Ok(TicketCategory::Infant),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A request for a number of tickets of one category.
///
/// A count of zero can be constructed but is rejected when purchasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    category: TicketCategory,

    #[serde(rename = "noOfTickets")]
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket type request.
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    /// Creates a request for adult tickets.
    pub fn adult(count: u32) -> Self {
        Self::new(TicketCategory::Adult, count)
    }

    /// Creates a request for child tickets.
    pub fn child(count: u32) -> Self {
        Self::new(TicketCategory::Child, count)
    }

    /// Creates a request for infant tickets.
    pub fn infant(count: u32) -> Self {
        Self::new(TicketCategory::Infant, count)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Ticket totals per category across all items of one purchase.
///
/// Built fresh for each purchase; repeated categories are summed. Totals are
/// kept in `u64` so that summing `u32` requests is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketCounts {
    /// Sums the counts of the given requests per category.
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a TicketTypeRequest>) -> Self {
        let mut counts = Self::default();
        for request in requests {
            counts.add(request);
        }
        counts
    }

    /// Adds a request's count to its category.
    ///
    /// Saturates at `u64::MAX`, which is above any `u32` ticket limit.
    pub fn add(&mut self, request: &TicketTypeRequest) {
        let slot = match request.category() {
            TicketCategory::Adult => &mut self.adults,
            TicketCategory::Child => &mut self.children,
            TicketCategory::Infant => &mut self.infants,
        };
        *slot = slot.saturating_add(u64::from(request.count()));
    }

    /// Returns the count for one category.
    pub fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adults,
            TicketCategory::Child => self.children,
            TicketCategory::Infant => self.infants,
        }
    }

    /// Total number of tickets across all categories.
    pub fn total(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Number of seats the tickets occupy.
    pub fn seats(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .filter(|category| category.occupies_seat())
            .map(|category| self.get(*category))
            .sum()
    }
}
