//! The pricing computation: unit prices, discounts, basket aggregation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use rust_decimal::Decimal;

use tally_core::{ArticleId, CalculatorError, CalculatorResult, CustomerId};

use crate::basket::{Basket, PricedBasket};
use crate::money::round_half_up;
use crate::sources::{DiscountSource, PriceSource};

/// Largest quantity a single basket entry may carry. The limit is
/// inclusive: 10 units price fine, 11 are rejected.
pub const MAX_ENTRY_QUANTITY: Decimal = Decimal::TEN;

/// Prices baskets against injected price and discount lookups.
///
/// Stateless apart from the shared read-only sources; safe to call
/// concurrently for independent baskets.
#[derive(Debug)]
pub struct BasketCalculator<P, D> {
    prices: Arc<P>,
    discounts: Arc<D>,
}

impl<P, D> Clone for BasketCalculator<P, D> {
    fn clone(&self) -> Self {
        Self {
            prices: Arc::clone(&self.prices),
            discounts: Arc::clone(&self.discounts),
        }
    }
}

impl<P, D> BasketCalculator<P, D>
where
    P: PriceSource,
    D: DiscountSource,
{
    pub fn new(prices: Arc<P>, discounts: Arc<D>) -> Self {
        Self { prices, discounts }
    }

    /// Unit price of an article for an (optional) customer.
    ///
    /// Without a customer, or for a customer with no discount on file, this
    /// is the full price, unrounded. With a discount factor the discounted
    /// unit price is rounded half-up to two decimal places.
    pub fn unit_price_for_customer(
        &self,
        article_id: &ArticleId,
        customer_id: Option<&CustomerId>,
    ) -> CalculatorResult<Decimal> {
        let full_price = self.full_price(article_id)?;

        let Some(customer_id) = customer_id else {
            return Ok(full_price);
        };

        match self.discounts.find_discount(customer_id) {
            None => Ok(full_price),
            Some(factor) => Ok(round_half_up(full_price * factor)),
        }
    }

    /// Price a whole basket.
    ///
    /// Entries are processed in submission order; a duplicated article id
    /// overwrites the earlier result entry. The total is the unrounded sum
    /// of the result mapping's values.
    pub fn calculate_basket(&self, basket: &Basket) -> CalculatorResult<PricedBasket> {
        let started = Instant::now();

        let mut priced_entries = BTreeMap::new();
        for entry in basket.entries() {
            let quantity = entry.quantity.ok_or_else(|| {
                CalculatorError::validation("Quantity should be greater than zero")
            })?;
            let article_id = entry
                .article_id
                .as_ref()
                .ok_or_else(|| CalculatorError::validation("Invalid article"))?;

            if quantity > MAX_ENTRY_QUANTITY {
                return Err(CalculatorError::QuantityExceeded(quantity));
            }

            let unit_price =
                self.unit_price_for_customer(article_id, basket.customer_id.as_ref())?;
            priced_entries.insert(article_id.clone(), quantity * unit_price);
        }

        let total_amount: Decimal = priced_entries.values().copied().sum();
        tracing::debug!(
            %total_amount,
            elapsed_us = started.elapsed().as_micros() as u64,
            "basket calculated"
        );

        Ok(PricedBasket {
            customer_id: basket.customer_id.clone(),
            priced_entries,
            total_amount,
        })
    }

    fn full_price(&self, article_id: &ArticleId) -> CalculatorResult<Decimal> {
        self.prices
            .find_price(article_id)
            .ok_or_else(|| CalculatorError::ArticleNotFound(article_id.clone()))
    }
}
