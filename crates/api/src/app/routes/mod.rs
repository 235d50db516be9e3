use axum::Router;

pub mod articles;
pub mod baskets;
pub mod system;

/// Router for all pricing endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/baskets", baskets::router())
        .nest("/articles", articles::router())
}
