use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use tally_core::{ArticleId, CustomerId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/:article_id/price", get(get_article_price))
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "customerId")]
    pub customer_id: Option<CustomerId>,
}

/// `GET /articles/{articleId}/price?customerId=` — unit price of an
/// article, discounted when the customer has a factor on file.
pub async fn get_article_price(
    Extension(services): Extension<Arc<AppServices>>,
    Path(article_id): Path<ArticleId>,
    Query(query): Query<PriceQuery>,
) -> axum::response::Response {
    match services.unit_price_for_customer(&article_id, query.customer_id.as_ref()) {
        Ok(price) => (StatusCode::OK, Json(dto::decimal_to_json(price))).into_response(),
        Err(e) => errors::calculator_error_to_response(e),
    }
}
