use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};

use tally_pricing::{validator, Basket};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(calculate_basket))
}

/// `POST /baskets` — price a submitted basket.
pub async fn calculate_basket(
    Extension(services): Extension<Arc<AppServices>>,
    Json(basket): Json<Basket>,
) -> axum::response::Response {
    if let Err(e) = validator::validate(&basket) {
        return errors::calculator_error_to_response(e);
    }

    match services.calculate_basket(&basket) {
        Ok(result) => (StatusCode::OK, Json(dto::priced_basket_to_json(&result))).into_response(),
        Err(e) => errors::calculator_error_to_response(e),
    }
}
