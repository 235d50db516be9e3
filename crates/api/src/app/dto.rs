use rust_decimal::Decimal;

use tally_pricing::PricedBasket;

// -------------------------
// JSON mapping helpers
// -------------------------

/// Render a decimal as a bare JSON number, preserving the exact decimal
/// digits (serde_json keeps arbitrary-precision numbers as text).
pub fn decimal_to_json(value: Decimal) -> serde_json::Value {
    serde_json::from_str::<serde_json::Number>(&value.to_string())
        .map(serde_json::Value::Number)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()))
}

pub fn priced_basket_to_json(result: &PricedBasket) -> serde_json::Value {
    serde_json::json!({
        "customerId": result.customer_id,
        "pricedBasketEntries": result
            .priced_entries
            .iter()
            .map(|(article_id, total)| (article_id.to_string(), decimal_to_json(*total)))
            .collect::<serde_json::Map<_, _>>(),
        "totalAmount": decimal_to_json(result.total_amount),
    })
}
