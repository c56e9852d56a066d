use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, state::AppState};

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::home))
}

pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/person/new", post(handlers::create_person))
        .route("/person/detail", get(handlers::show_person_detail))
        .route("/person/detail/:person_id", get(handlers::show_person_by_id))
        .route("/person/:person_id", put(handlers::update_person))
}

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/contact", post(handlers::contact))
}

pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/post-image", post(handlers::post_image))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}
