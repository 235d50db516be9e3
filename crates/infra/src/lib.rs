//! `tally-infra` — backing implementations of the pricing lookup traits.
//!
//! Everything here is swappable: the pricing core only sees the
//! `PriceSource`/`DiscountSource` traits from `tally-pricing`. These
//! in-memory tables stand in for a real price/discount store.

pub mod discount_repository;
pub mod price_repository;

pub use discount_repository::InMemoryDiscountRepository;
pub use price_repository::InMemoryPriceRepository;
