use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tally_core::CalculatorError;

/// Error code carried by every error body (fixed by the wire contract).
pub const DEFAULT_ERROR_CODE: &str = "100";

/// Message returned for unclassified failures; internals are never leaked.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again!";

pub fn calculator_error_to_response(err: CalculatorError) -> axum::response::Response {
    match &err {
        CalculatorError::Validation(_) | CalculatorError::QuantityExceeded(_) => {
            json_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        CalculatorError::ArticleNotFound(_) => json_error(StatusCode::NOT_FOUND, err.to_string()),
        CalculatorError::Internal(detail) => {
            tracing::error!("unclassified calculator failure: {detail}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
            "code": DEFAULT_ERROR_CODE,
        })),
    )
        .into_response()
}
