//! Money rounding policy.
//!
//! All monetary values are exact decimals. There is a single rounding rule
//! in the system: discounted unit prices are rounded half-up (half away
//! from zero) to two decimal places. Entry totals and the basket total are
//! never re-rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary scale: two decimal places.
pub const MONEY_SCALE: u32 = 2;

/// Round half-up (half away from zero) to [`MONEY_SCALE`] decimal places.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
