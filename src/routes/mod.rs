pub mod booking_routes;
pub mod order_routes;
pub mod racket_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Router completo de la aplicación (sin layers ni estado aplicado)
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/order", order_routes::create_order_router())
        .nest("/api/booking", booking_routes::create_booking_router())
        .nest("/api/racket", racket_routes::create_racket_router())
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "racket-rental",
        "status": "healthy",
        "timestamp": chrono::Local::now().naive_local().to_string(),
    }))
}
