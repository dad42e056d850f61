//! Seat reservation service trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use common::AccountId;
use ticketing::ServiceError;

/// Trait for reserving seats for an account.
///
/// Reservations are expected to always succeed; an `Err` is treated as an
/// unexpected fault and fails the purchase.
pub trait SeatReservationService: Send + Sync {
    /// Reserves `seats` seats for the account.
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError>;
}

#[derive(Debug, Default)]
struct InMemorySeatState {
    reservations: Vec<(AccountId, u64)>,
    fail_on_reserve: bool,
}

/// In-memory seat reservation service that records every reservation.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemorySeatState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory seat reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail every reservation.
    pub fn set_fail_on_reserve(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_reserve = fail;
    }

    /// Returns the number of reservations made.
    pub fn reservation_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .len()
    }

    /// Returns every reservation made, oldest first.
    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .clone()
    }

    /// Returns the number of seats reserved across all accounts.
    pub fn seats_reserved(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .reservations
            .iter()
            .map(|(_, seats)| seats)
            .sum()
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_reserve {
            return Err(ServiceError::new("Seat reservation unavailable"));
        }

        tracing::debug!(%account_id, seats, "seats reserved");
        state.reservations.push((account_id, seats));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_seats() {
        let service = InMemorySeatReservationService::new();
        let account_id = AccountId::new(9).unwrap();

        service.reserve_seats(account_id, 5).unwrap();
        service.reserve_seats(account_id, 3).unwrap();

        assert_eq!(service.reservation_count(), 2);
        assert_eq!(service.reservations(), vec![(account_id, 5), (account_id, 3)]);
        assert_eq!(service.seats_reserved(), 8);
    }

    #[test]
    fn test_fail_on_reserve() {
        let service = InMemorySeatReservationService::new();
        service.set_fail_on_reserve(true);

        let result = service.reserve_seats(AccountId::new(1).unwrap(), 2);
        assert!(result.is_err());
        assert_eq!(service.reservation_count(), 0);
    }
}
