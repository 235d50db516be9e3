use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_core::{ArticleId, CustomerId};

/// A basket as submitted for pricing (wire shape, not yet validated).
///
/// Fields are optional because callers may omit them; the
/// [validator](crate::validator) turns absence into the contractual error
/// messages instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub customer_id: Option<CustomerId>,
    pub entries: Option<Vec<BasketEntry>>,
}

impl Basket {
    pub fn new(customer_id: Option<CustomerId>, entries: Vec<BasketEntry>) -> Self {
        Self {
            customer_id,
            entries: Some(entries),
        }
    }

    /// Entries in submission order; an absent list reads as empty.
    pub fn entries(&self) -> &[BasketEntry] {
        self.entries.as_deref().unwrap_or_default()
    }
}

/// One basket line: an article and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketEntry {
    pub article_id: Option<ArticleId>,
    pub quantity: Option<Decimal>,
}

impl BasketEntry {
    pub fn new(article_id: impl Into<ArticleId>, quantity: Decimal) -> Self {
        Self {
            article_id: Some(article_id.into()),
            quantity: Some(quantity),
        }
    }
}

/// Result of pricing a basket.
///
/// `priced_entries` maps each article id to the total for that article. A
/// duplicated article id in the input keeps the **last** submitted entry's
/// total. `total_amount` is the unrounded sum of the mapping's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedBasket {
    pub customer_id: Option<CustomerId>,
    pub priced_entries: BTreeMap<ArticleId, Decimal>,
    pub total_amount: Decimal,
}
