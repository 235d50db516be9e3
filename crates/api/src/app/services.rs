use std::sync::Arc;

use rust_decimal::Decimal;

use tally_core::{ArticleId, CalculatorResult, CustomerId};
use tally_infra::{InMemoryDiscountRepository, InMemoryPriceRepository};
use tally_pricing::{Basket, BasketCalculator, PricedBasket};

/// Calculator wired against the in-memory repositories.
pub type InMemoryBasketCalculator =
    BasketCalculator<InMemoryPriceRepository, InMemoryDiscountRepository>;

/// Shared per-process services the handlers call into.
#[derive(Debug, Clone)]
pub struct AppServices {
    calculator: InMemoryBasketCalculator,
}

/// In-memory wiring (the reference data setup): generated, memoized prices
/// and the static discount table.
pub fn build_services() -> AppServices {
    let prices = Arc::new(InMemoryPriceRepository::new());
    let discounts = Arc::new(InMemoryDiscountRepository::new());

    AppServices {
        calculator: BasketCalculator::new(prices, discounts),
    }
}

impl AppServices {
    pub fn calculate_basket(&self, basket: &Basket) -> CalculatorResult<PricedBasket> {
        self.calculator.calculate_basket(basket)
    }

    pub fn unit_price_for_customer(
        &self,
        article_id: &ArticleId,
        customer_id: Option<&CustomerId>,
    ) -> CalculatorResult<Decimal> {
        self.calculator
            .unit_price_for_customer(article_id, customer_id)
    }
}
