//! HTTP API application wiring (axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: calculator + repository wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: response JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(ServiceBuilder::new())
}
