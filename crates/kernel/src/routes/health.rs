//! Health check endpoint.
//!
//! The catalog is loaded before the server binds, so a running server is
//! always healthy. The response reports what it is serving.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    restaurants: usize,
    open_carts: usize,
    orders: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        restaurants: state.catalog().len(),
        open_carts: state.carts().len(),
        orders: state.orders().len(),
    })
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
