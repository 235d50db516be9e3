//! Lookup capabilities the pricing core depends on.
//!
//! Reference data (price tables, discount tables) is owned elsewhere; the
//! core only reads through these traits. Backing implementations live in
//! `tally-infra` and are swappable.

use rust_decimal::Decimal;

use tally_core::{ArticleId, CustomerId};

/// Resolves the unit price of an article.
///
/// `None` is a lookup miss; the calculator treats it as a hard failure
/// ([`ArticleNotFound`](tally_core::CalculatorError::ArticleNotFound)),
/// never as a zero price.
pub trait PriceSource: Send + Sync {
    fn find_price(&self, article_id: &ArticleId) -> Option<Decimal>;
}

/// Resolves the discount factor of a customer, if any.
///
/// The factor is a multiplier in `(0, 1]` (0.90 means the customer pays
/// 90%). `None` means "no discount on file" and is not an error.
pub trait DiscountSource: Send + Sync {
    fn find_discount(&self, customer_id: &CustomerId) -> Option<Decimal>;
}
