//! In-memory price table.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

use tally_core::ArticleId;
use tally_pricing::PriceSource;

/// Memoized in-memory price table.
///
/// Unknown articles get a generated price on first lookup, which is then
/// remembered: repeated lookups for the same article are stable for the
/// lifetime of the repository.
#[derive(Debug, Default)]
pub struct InMemoryPriceRepository {
    prices: Mutex<HashMap<ArticleId, Decimal>>,
}

impl InMemoryPriceRepository {
    /// An empty table; every article gets a generated price on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table seeded with fixed prices. Unseeded articles still fall back
    /// to generated prices.
    pub fn with_prices<I, A>(prices: I) -> Self
    where
        I: IntoIterator<Item = (A, Decimal)>,
        A: Into<ArticleId>,
    {
        Self {
            prices: Mutex::new(
                prices
                    .into_iter()
                    .map(|(article, price)| (article.into(), price))
                    .collect(),
            ),
        }
    }

    /// Uniform in [0.50, 30.00), rounded to cents.
    fn generated_price() -> Decimal {
        let raw: f64 = rand::thread_rng().gen_range(0.50..30.00);
        Decimal::from_f64_retain(raw)
            .unwrap_or(Decimal::ONE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl PriceSource for InMemoryPriceRepository {
    fn find_price(&self, article_id: &ArticleId) -> Option<Decimal> {
        let mut prices = self.prices.lock().unwrap();
        Some(
            *prices
                .entry(article_id.clone())
                .or_insert_with(Self::generated_price),
        )
    }
}
