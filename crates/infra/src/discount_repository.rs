//! In-memory customer discount table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use tally_core::CustomerId;
use tally_pricing::DiscountSource;

/// Static in-memory discount table.
///
/// Absence of a customer means "no discount", not an error. The default
/// table carries the reference customers.
#[derive(Debug, Clone)]
pub struct InMemoryDiscountRepository {
    discounts: HashMap<CustomerId, Decimal>,
}

impl InMemoryDiscountRepository {
    pub fn new() -> Self {
        Self::with_discounts([
            ("customer-1", Decimal::new(90, 2)),
            ("customer-2", Decimal::new(85, 2)),
        ])
    }

    pub fn with_discounts<I, C>(discounts: I) -> Self
    where
        I: IntoIterator<Item = (C, Decimal)>,
        C: Into<CustomerId>,
    {
        Self {
            discounts: discounts
                .into_iter()
                .map(|(customer, factor)| (customer.into(), factor))
                .collect(),
        }
    }
}

impl Default for InMemoryDiscountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountSource for InMemoryDiscountRepository {
    fn find_discount(&self, customer_id: &CustomerId) -> Option<Decimal> {
        self.discounts.get(customer_id).copied()
    }
}
