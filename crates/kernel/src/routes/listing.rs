//! Restaurant listing API routes.
//!
//! The listing endpoint takes the same query string the storefront URL
//! carries and answers with one page of results plus pager controls.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{CuisineEntry, MenuCategory, RestaurantRecord, Review};
use crate::error::{AppError, AppResult};
use crate::listing::{self, ListingPage, PagerControls, QueryState};
use crate::review::NewReview;
use crate::state::AppState;

/// Create the listing router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/restaurants", get(list_restaurants))
        .route("/api/restaurant/{id}", get(get_restaurant))
        .route(
            "/api/restaurant/{id}/reviews",
            get(list_reviews).post(submit_review),
        )
        .route("/api/cuisines", get(list_cuisines))
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

/// Landing screen: the cuisine carousel and the featured row.
#[derive(Serialize)]
struct HomeResponse<'a> {
    cuisines: &'a [CuisineEntry],
    featured: Vec<&'a RestaurantRecord>,
}

#[derive(Serialize)]
struct ListingResponse<'a> {
    /// Normalised query, suitable for rebuilding the page URL.
    query: &'a QueryState,
    query_string: String,
    #[serde(flatten)]
    page: ListingPage<'a>,
    pager: Option<PagerControls>,
    /// Cuisine labels offered by the filter control.
    cuisine_options: Vec<String>,
}

#[derive(Serialize)]
struct RestaurantResponse<'a> {
    restaurant: &'a RestaurantRecord,
    menu: &'a [MenuCategory],
    reviews: Vec<Review>,
}

#[derive(Serialize)]
struct ReviewsResponse {
    reviews: Vec<Review>,
}

#[derive(Serialize)]
struct CuisinesResponse<'a> {
    cuisines: &'a [CuisineEntry],
    filter_options: Vec<String>,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

async fn home(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();

    Json(HomeResponse {
        cuisines: &catalog.cuisines,
        featured: catalog.featured(),
    })
    .into_response()
}

async fn list_restaurants(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut query = QueryState::from_params(&params);
    let catalog = state.catalog();

    let page = listing::query(&catalog.restaurants, &query, state.page_size());
    query.page = i64::try_from(page.page).unwrap_or(1);

    debug!(
        matches = page.total_matches,
        page = page.page,
        total_pages = page.total_pages,
        "listing served"
    );

    let pager = PagerControls::new(page.page, page.total_pages);
    Json(ListingResponse {
        query_string: query.to_query_string(),
        query: &query,
        page,
        pager,
        cuisine_options: catalog.unique_cuisines(),
    })
    .into_response()
}

async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let catalog = state.catalog();
    let restaurant = catalog
        .restaurant(&id)
        .ok_or(AppError::NotFound("restaurant"))?;

    let reviews = state.reviews().list(&id)?;

    Ok(Json(RestaurantResponse {
        restaurant,
        menu: &catalog.menu,
        reviews,
    })
    .into_response())
}

async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReviewsResponse>> {
    let reviews = state.reviews().list(&id)?;
    Ok(Json(ReviewsResponse { reviews }))
}

async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<NewReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state
        .reviews()
        .submit(&id, request, Utc::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(review)))
}

async fn list_cuisines(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();

    Json(CuisinesResponse {
        cuisines: &catalog.cuisines,
        filter_options: catalog.unique_cuisines(),
    })
    .into_response()
}
