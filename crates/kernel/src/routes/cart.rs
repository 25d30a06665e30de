//! Cart API routes.
//!
//! Carts live in memory and are addressed by the id returned on creation.
//! Checking out a cart removes it and places an order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartLine, CartTotals, PromoStatus};
use crate::error::AppResult;
use crate::order::TrackingView;
use crate::state::AppState;

/// Create the cart router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cart", post(create_cart))
        .route("/api/cart/{id}", get(get_cart))
        .route("/api/cart/{id}/items", post(add_item))
        .route(
            "/api/cart/{id}/items/{item_id}",
            put(set_quantity).delete(remove_item),
        )
        .route("/api/cart/{id}/promo", post(apply_promo))
        .route("/api/cart/{id}/checkout", post(checkout))
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CartResponse {
    id: Uuid,
    lines: Vec<CartLine>,
    promo_code: Option<String>,
    item_count: u32,
    totals: CartTotals,
}

impl CartResponse {
    fn new(id: Uuid, cart: Cart) -> Self {
        Self {
            id,
            item_count: cart.item_count(),
            totals: cart.totals(),
            lines: cart.lines,
            promo_code: cart.promo_code,
        }
    }
}

#[derive(Serialize)]
struct PromoResponse {
    promo: PromoStatus,
    cart: CartResponse,
}

// -------------------------------------------------------------------------
// Request types
// -------------------------------------------------------------------------

#[derive(Deserialize)]
struct AddItemRequest {
    menu_item_id: String,
    #[serde(default = "default_quantity")]
    quantity: u32,
    restaurant_id: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Deserialize)]
struct SetQuantityRequest {
    quantity: u32,
}

#[derive(Deserialize)]
struct PromoRequest {
    code: String,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

async fn create_cart(State(state): State<AppState>) -> (StatusCode, Json<CartResponse>) {
    let id = state.carts().create();
    (StatusCode::CREATED, Json(CartResponse::new(id, Cart::new())))
}

async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CartResponse>> {
    let cart = state.carts().get(id)?;
    Ok(Json(CartResponse::new(id, cart)))
}

async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<Json<CartResponse>> {
    let cart = state.carts().add_item(
        id,
        &request.menu_item_id,
        request.quantity,
        request.restaurant_id.as_deref(),
    )?;
    Ok(Json(CartResponse::new(id, cart)))
}

async fn set_quantity(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, String)>,
    Json(request): Json<SetQuantityRequest>,
) -> AppResult<Json<CartResponse>> {
    let cart = state.carts().set_quantity(id, &item_id, request.quantity)?;
    Ok(Json(CartResponse::new(id, cart)))
}

async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, String)>,
) -> AppResult<Json<CartResponse>> {
    let cart = state.carts().remove_item(id, &item_id)?;
    Ok(Json(CartResponse::new(id, cart)))
}

async fn apply_promo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PromoRequest>,
) -> AppResult<Json<PromoResponse>> {
    let (promo, cart) = state.carts().apply_promo(id, &request.code)?;
    Ok(Json(PromoResponse {
        promo,
        cart: CartResponse::new(id, cart),
    }))
}

async fn checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<TrackingView>)> {
    let cart = state.carts().take_for_checkout(id)?;
    let placed_at = Utc::now();
    let order = state.orders().place_at(cart, placed_at);
    let view = state.orders().tracking(order.id, placed_at)?;

    Ok((StatusCode::CREATED, Json(view)))
}
