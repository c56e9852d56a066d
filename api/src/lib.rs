//! Person API
//!
//! A small axum service demonstrating request/response validation: typed
//! JSON bodies, query/path constraints, form submissions, header and cookie
//! parameters, and multipart file upload. There is no storage; a fixed
//! membership set stands in for a database.

pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod state;
pub mod validation;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the application router with middleware and state attached.
pub fn app() -> Router {
    Router::new()
        .merge(routes::home_routes())
        .merge(routes::person_routes())
        .merge(routes::account_routes())
        .merge(routes::upload_routes())
        .merge(routes::health_routes())
        .fallback(handlers::route_not_found)
        .layer(middleware::from_fn(request_logger))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new())
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!("{method} {uri} {status} {elapsed}ms");

    response
}
