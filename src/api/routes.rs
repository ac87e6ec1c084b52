//! API route configuration.

use crate::api::handlers::{
    create_url_handler, creation_history_handler, delete_url_handler, health_handler,
    history_handler, list_urls_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET    /health`               - Liveness
/// - `GET    /urls`                 - List registered URLs
/// - `POST   /urls`                 - Register a short URL
/// - `DELETE /urls/{code}`          - Delete a URL and its history
/// - `GET    /urls/{code}/stats`    - Access counter for a URL
/// - `GET    /urls/{code}/history`  - Access history for a URL
/// - `GET    /creation-history`     - All creation events
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/urls", get(list_urls_handler).post(create_url_handler))
        .route("/urls/{code}", delete(delete_url_handler))
        .route("/urls/{code}/stats", get(stats_handler))
        .route("/urls/{code}/history", get(history_handler))
        .route("/creation-history", get(creation_history_handler))
}
