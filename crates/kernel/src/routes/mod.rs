//! HTTP route handlers.

pub mod cart;
pub mod health;
pub mod listing;
pub mod order;

use axum::Router;

use crate::state::AppState;

/// Every storefront route, without middleware layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(listing::router())
        .merge(cart::router())
        .merge(order::router())
}
