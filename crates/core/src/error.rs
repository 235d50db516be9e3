//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::ArticleId;

/// Result type used across the pricing domain.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Pricing-domain error.
///
/// The `Display` output is the boundary-visible message: the HTTP layer
/// surfaces these verbatim, so the exact strings live here. Keep this
/// focused on deterministic pricing failures; infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A basket or entry failed validation.
    #[error("{0}")]
    Validation(String),

    /// An entry asked for more units than a single basket may carry.
    #[error("Quantity {0} exceeds the available amount")]
    QuantityExceeded(Decimal),

    /// No price is known for the article. A lookup miss is a hard failure,
    /// never a zero price.
    #[error("Could not find price for article {0}")]
    ArticleNotFound(ArticleId),

    /// Anything unclassified. The boundary replaces the message with a
    /// fixed safe string; the detail is only for logs.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CalculatorError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
