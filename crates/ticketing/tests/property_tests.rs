//! Property-based tests for the purchase rules.
//!
//! Valid request sets are generated from the rules themselves: at least one
//! adult, no more infants than adults, and a total within the limit.

use proptest::prelude::*;
use ticketing::{
    InvalidPurchase, PriceTable, PurchasePolicy, TicketCategory, TicketTypeRequest,
    assess_purchase,
};

fn valid_counts() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=25)
        .prop_flat_map(|adults| (Just(adults), 0u32..=(25 - adults)))
        .prop_flat_map(|(adults, children)| {
            let infant_cap = adults.min(25 - adults - children);
            (Just(adults), Just(children), 0u32..=infant_cap)
        })
}

/// Splits a count into several requests of the same category.
fn split(category: TicketCategory, count: u32, pieces: u32) -> Vec<TicketTypeRequest> {
    let pieces = pieces.clamp(1, count.max(1));
    let base = count / pieces;
    let remainder = count % pieces;
    (0..pieces)
        .map(|i| base + u32::from(i < remainder))
        .filter(|n| *n > 0)
        .map(|n| TicketTypeRequest::new(category, n))
        .collect()
}

proptest! {
    /// Valid purchases are priced and seated by the formulas
    #[test]
    fn valid_purchase_price_and_seats(
        (adults, children, infants) in valid_counts(),
        adult_price in 1u32..=500,
        child_price in 1u32..=500,
        account_id in 1u64..=u64::MAX,
    ) {
        let policy = PurchasePolicy::new(25, PriceTable::new(adult_price, child_price).unwrap());
        let mut requests = vec![TicketTypeRequest::adult(adults)];
        if children > 0 {
            requests.push(TicketTypeRequest::child(children));
        }
        if infants > 0 {
            requests.push(TicketTypeRequest::infant(infants));
        }

        let order = assess_purchase(account_id, &requests, &policy).unwrap();

        let expected_price = u64::from(adults) * u64::from(adult_price)
            + u64::from(children) * u64::from(child_price);
        prop_assert_eq!(order.total_price(), expected_price);
        prop_assert_eq!(order.total_seats(), u64::from(adults + children));
        prop_assert_eq!(order.account_id().get(), account_id);
    }

    /// Splitting a category over several requests does not change the outcome
    #[test]
    fn split_requests_are_summed(
        (adults, children, infants) in valid_counts(),
        pieces in 1u32..=5,
    ) {
        let policy = PurchasePolicy::default();
        let mut combined = vec![TicketTypeRequest::adult(adults)];
        let mut split_up = split(TicketCategory::Adult, adults, pieces);
        if children > 0 {
            combined.push(TicketTypeRequest::child(children));
            split_up.extend(split(TicketCategory::Child, children, pieces));
        }
        if infants > 0 {
            combined.push(TicketTypeRequest::infant(infants));
            split_up.extend(split(TicketCategory::Infant, infants, pieces));
        }

        let a = assess_purchase(1, &combined, &policy).unwrap();
        let b = assess_purchase(1, &split_up, &policy).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Any total above the limit is rejected
    #[test]
    fn over_limit_rejected(adults in 1u32..=100, extra in 1u32..=100) {
        let policy = PurchasePolicy::default();
        let requests = [TicketTypeRequest::adult(25 + extra), TicketTypeRequest::child(adults)];
        let result = assess_purchase(1, &requests, &policy);
        let is_too_many = matches!(result, Err(InvalidPurchase::TooManyTickets { .. }));
        prop_assert!(is_too_many);
    }

    /// Requests without adults are rejected
    #[test]
    fn no_adult_rejected(children in 0u32..=12, infants in 0u32..=12) {
        let mut requests = Vec::new();
        if children > 0 {
            requests.push(TicketTypeRequest::child(children));
        }
        if infants > 0 {
            requests.push(TicketTypeRequest::infant(infants));
        }
        let result = assess_purchase(1, &requests, &PurchasePolicy::default());
        let is_no_adult = matches!(result, Err(InvalidPurchase::NoAdultTicket));
        prop_assert!(is_no_adult);
    }

    /// More infants than adults is rejected
    #[test]
    fn infants_over_adults_rejected(adults in 1u32..=12, surplus in 1u32..=12) {
        let requests = [
            TicketTypeRequest::adult(adults),
            TicketTypeRequest::infant(adults + surplus),
        ];
        let result = assess_purchase(1, &requests, &PurchasePolicy::default());
        let is_too_many_infants = matches!(result, Err(InvalidPurchase::TooManyInfants { .. }));
        prop_assert!(is_too_many_infants);
    }

    /// A zero count anywhere in the list is rejected
    #[test]
    fn zero_count_rejected(position in 0usize..4) {
        let mut requests = vec![
            TicketTypeRequest::adult(2),
            TicketTypeRequest::child(1),
            TicketTypeRequest::infant(1),
        ];
        requests.insert(position.min(requests.len()), TicketTypeRequest::child(0));
        let result = assess_purchase(1, &requests, &PurchasePolicy::default());
        let is_below_minimum = matches!(
            result,
            Err(InvalidPurchase::TicketCountBelowMinimum { index, .. }) if index == position.min(3)
        );
        prop_assert!(is_below_minimum);
    }
}
