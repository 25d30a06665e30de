//! Order tracking API routes.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppResult;
use crate::order::{OrderSummary, TrackingView};
use crate::state::AppState;

/// Create the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/order/{id}", get(get_order))
        .route("/api/order/{id}/delivered", post(mark_delivered))
}

/// Order history, newest first.
async fn list_orders(State(state): State<AppState>) -> Json<Vec<OrderSummary>> {
    Json(state.orders().list(Utc::now()))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TrackingView>> {
    Ok(Json(state.orders().tracking(id, Utc::now())?))
}

async fn mark_delivered(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TrackingView>> {
    let now = Utc::now();
    state.orders().mark_delivered(id, now)?;
    Ok(Json(state.orders().tracking(id, now)?))
}
