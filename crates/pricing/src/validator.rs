//! Basket well-formedness checks.

use rust_decimal::Decimal;

use tally_core::{CalculatorError, CalculatorResult};

use crate::basket::Basket;

/// Validate a submitted basket before pricing.
///
/// Fail-fast: the first violation found is returned, walking entries in
/// submission order and checking quantity before article id within each
/// entry. Quantity *limits* are not checked here; the calculator enforces
/// them.
pub fn validate(basket: &Basket) -> CalculatorResult<()> {
    let Some(entries) = basket.entries.as_ref() else {
        return Err(CalculatorError::validation("Basket should not be empty."));
    };

    for entry in entries {
        match entry.quantity {
            Some(quantity) if quantity > Decimal::ZERO => {}
            _ => {
                return Err(CalculatorError::validation(
                    "Quantity should be greater than zero",
                ));
            }
        }

        if entry.article_id.is_none() {
            return Err(CalculatorError::validation("Invalid article"));
        }
    }

    Ok(())
}
