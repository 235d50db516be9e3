//! `tally-pricing` — the basket pricing core.
//!
//! Pure computation: no I/O, no framework types. Prices and discounts come
//! in through the [`sources`] lookup traits; everything else is arithmetic
//! over exact decimals.

pub mod basket;
pub mod calculator;
pub mod money;
pub mod sources;
pub mod validator;

pub use basket::{Basket, BasketEntry, PricedBasket};
pub use calculator::{BasketCalculator, MAX_ENTRY_QUANTITY};
pub use sources::{DiscountSource, PriceSource};
