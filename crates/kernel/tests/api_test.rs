//! HTTP API integration tests.
//!
//! Exercises the storefront routes end to end through the real router.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use common::TestApp;
use platter_test_utils::{assert, catalog_of, numbered_restaurants};

#[tokio::test]
async fn health_reports_catalog_size() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["restaurants"], 8);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn listing_defaults() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/restaurants").await;

    assert_eq!(status, StatusCode::OK);
    assert::restaurant_ids(&body["items"], &["7", "2", "6", "4", "1", "8", "5", "3"]);
    assert_eq!(body["total_matches"], 8);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["page"], 1);
    assert!(body["pager"].is_null());
    assert_eq!(body["query_string"], "");
    assert::has_key(&body, "cuisine_options");
}

#[tokio::test]
async fn listing_search_is_percent_decoded() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/restaurants?search=ice+cream").await;

    assert_eq!(status, StatusCode::OK);
    assert::restaurant_ids(&body["items"], &["8"]);
    assert_eq!(body["query"]["search"], "ice cream");

    let (_, body) = app.get("/api/restaurants?search=Pasta%20Paradise").await;
    assert::restaurant_ids(&body["items"], &["6"]);
}

#[tokio::test]
async fn listing_filters_and_sort() {
    let app = TestApp::new();
    let (_, body) = app
        .get("/api/restaurants?free_delivery=true&sort=delivery-time")
        .await;

    assert::restaurant_ids(&body["items"], &["7", "2", "4"]);
    assert_eq!(
        body["query_string"],
        "sort=delivery-time-asc&free_delivery=1"
    );

    let (_, body) = app.get("/api/restaurants?cuisine=Italian").await;
    assert::restaurant_ids(&body["items"], &["6", "1"]);
}

#[tokio::test]
async fn listing_unknown_cuisine_is_empty() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/restaurants?cuisine=Klingon").await;

    assert_eq!(status, StatusCode::OK);
    assert::restaurant_ids(&body["items"], &[]);
    assert_eq!(body["total_pages"], 1);
}

#[tokio::test]
async fn listing_pages_are_clamped() {
    let app = TestApp::with_catalog(catalog_of(numbered_restaurants(20)), 8);

    let (_, body) = app.get("/api/restaurants?page=99").await;
    assert_eq!(body["page"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 4);
    assert_eq!(body["query"]["page"], 3);
    assert_eq!(body["pager"]["prev"], 2);
    assert!(body["pager"]["next"].is_null());

    let (_, body) = app.get("/api/restaurants?page=abc").await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["pager"]["links"][0]["kind"], "page");
    assert_eq!(body["pager"]["links"][0]["active"], true);
}

#[tokio::test]
async fn restaurant_detail() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/restaurant/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["name"], "Pasta Paradise");
    assert_eq!(body["menu"].as_array().unwrap().len(), 4);
    assert_eq!(body["reviews"], json!([]));

    let (status, body) = app.get("/api/restaurant/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "restaurant not found");
}

#[tokio::test]
async fn home_lists_featured_restaurants() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cuisines"].as_array().unwrap().len(), 8);
    assert::restaurant_ids(&body["featured"], &["1", "3", "2", "5"]);
}

#[tokio::test]
async fn home_without_featured_restaurants() {
    let app = TestApp::with_catalog(catalog_of(numbered_restaurants(3)), 8);
    let (status, body) = app.get("/api/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["featured"], json!([]));
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn restaurant_detail_includes_reviews() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/restaurant/1").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0]["user_name"], "Alice Wonderland");
    assert_eq!(reviews[0]["date"], "2024-07-15");
}

#[tokio::test]
async fn submitted_review_is_listed_first() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/restaurant/1/reviews",
            json!({ "user_name": "Dana", "rating": 5, "text": "  Great crust.  " }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["text"], "Great crust.");
    assert_eq!(body["restaurant_id"], "1");

    let (status, body) = app.get("/api/restaurant/1/reviews").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 4);
    assert_eq!(reviews[0]["user_name"], "Dana");
}

#[tokio::test]
async fn anonymous_review_gets_placeholder_name() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/restaurant/4/reviews",
            json!({ "rating": 3, "text": "Fine." }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_name"], "Anonymous");
}

#[tokio::test]
async fn invalid_reviews_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/restaurant/1/reviews",
            json!({ "rating": 4, "text": "   " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad request: review text is empty");

    let (status, _) = app
        .post(
            "/api/restaurant/1/reviews",
            json!({ "rating": 0, "text": "Zero stars" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/api/restaurant/404/reviews",
            json!({ "rating": 4, "text": "Where is it?" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "restaurant not found");

    // Nothing was stored.
    let (_, body) = app.get("/api/restaurant/1/reviews").await;
    assert_eq!(body["reviews"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn cuisines_list() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/cuisines").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cuisines"].as_array().unwrap().len(), 8);
    assert_eq!(body["cuisines"][0]["art"]["kind"], "icon");

    let options = body["filter_options"].as_array().unwrap();
    assert!(options.contains(&json!("Italian")));
    assert!(options.contains(&json!("Ice Cream")));
}

// =============================================================================
// Cart and checkout
// =============================================================================

#[tokio::test]
async fn cart_lifecycle() {
    let app = TestApp::new();
    let cart = app.create_cart().await;

    let (status, body) = app
        .post(
            &format!("/api/cart/{cart}/items"),
            json!({ "menu_item_id": "m1", "quantity": 2, "restaurant_id": "1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_count"], 2);
    assert_eq!(body["totals"]["subtotal_cents"], 2598);
    assert_eq!(body["totals"]["shipping_cents"], 500);
    assert_eq!(body["totals"]["total_cents"], 3098);

    let (_, body) = app
        .put(&format!("/api/cart/{cart}/items/m1"), json!({ "quantity": 0 }))
        .await;
    assert_eq!(body["lines"][0]["quantity"], 1);

    let (_, body) = app
        .post(&format!("/api/cart/{cart}/items"), json!({ "menu_item_id": "m4" }))
        .await;
    assert_eq!(body["item_count"], 2);

    let (status, body) = app.delete(&format!("/api/cart/{cart}/items/m1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 1);
    assert_eq!(body["totals"]["subtotal_cents"], 700);
}

#[tokio::test]
async fn cart_errors() {
    let app = TestApp::new();
    let cart = app.create_cart().await;

    let (status, _) = app
        .post(&format!("/api/cart/{cart}/items"), json!({ "menu_item_id": "m99" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete(&format!("/api/cart/{cart}/items/m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.post(&format!("/api/cart/{cart}/checkout"), json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "cart is empty");

    let (status, body) = app
        .get("/api/cart/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "cart not found");

    let response = app
        .request(Request::get("/api/cart/not-a-uuid").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn promo_codes() {
    let app = TestApp::new();
    let cart = app.create_cart().await;
    app.post(&format!("/api/cart/{cart}/items"), json!({ "menu_item_id": "m2" }))
        .await;

    let (_, body) = app
        .post(&format!("/api/cart/{cart}/promo"), json!({ "code": "SAVE" }))
        .await;
    assert_eq!(body["promo"]["status"], "incomplete");

    let (_, body) = app
        .post(&format!("/api/cart/{cart}/promo"), json!({ "code": "SAVE20" }))
        .await;
    assert_eq!(body["promo"]["status"], "invalid");
    assert!(body["cart"]["promo_code"].is_null());

    let (_, body) = app
        .post(&format!("/api/cart/{cart}/promo"), json!({ "code": "SAVE10" }))
        .await;
    assert_eq!(body["promo"]["status"], "applied");
    assert_eq!(body["promo"]["discount_cents"], 155);
    assert_eq!(body["cart"]["totals"]["total_cents"], 1550 + 500 - 155);
}

#[tokio::test]
async fn checkout_places_order() {
    let app = TestApp::new();
    let cart = app.create_cart().await;
    app.post(
        &format!("/api/cart/{cart}/items"),
        json!({ "menu_item_id": "m3", "quantity": 3 }),
    )
    .await;

    let (status, body) = app.post(&format!("/api/cart/{cart}/checkout"), json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["progress_percent"], 25);
    assert_eq!(body["order"]["total_cents"], 975 * 3 + 500);
    assert_eq!(body["milestones"].as_array().unwrap().len(), 4);

    // The cart is consumed by checkout.
    let (status, _) = app.get(&format!("/api/cart/{cart}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let order = body["order"]["id"].as_str().unwrap().to_string();
    let (status, body) = app.get(&format!("/api/order/{order}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["id"], order.as_str());

    let (status, body) = app
        .post(&format!("/api/order/{order}/delivered"), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");
    assert_eq!(body["progress_percent"], 100);
}

#[tokio::test]
async fn unknown_order() {
    let app = TestApp::new();
    let (status, body) = app
        .get("/api/order/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "order not found");
}

#[tokio::test]
async fn order_history_lists_placed_orders() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let cart = app.create_cart().await;
    app.post(
        &format!("/api/cart/{cart}/items"),
        json!({ "menu_item_id": "m3", "quantity": 2 }),
    )
    .await;
    app.post(
        &format!("/api/cart/{cart}/items"),
        json!({ "menu_item_id": "m1", "quantity": 1 }),
    )
    .await;
    let (_, placed) = app.post(&format!("/api/cart/{cart}/checkout"), json!({})).await;

    let (status, body) = app.get("/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], placed["order"]["id"]);
    assert_eq!(orders[0]["status"], "confirmed");
    assert_eq!(
        orders[0]["items_preview"],
        "Caesar Salad (2), Margherita Pizza"
    );
}
