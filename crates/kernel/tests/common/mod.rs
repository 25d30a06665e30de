#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps the real kernel router and state. Each test builds its
//! own app, so carts and orders never leak between tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use platter_kernel::catalog::Catalog;
use platter_kernel::order::TrackingTimeline;
use platter_kernel::{AppState, routes};

/// Test application wrapper using the real kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over the built-in catalog with the default page size.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded(), 8)
    }

    pub fn with_catalog(catalog: Catalog, page_size: usize) -> Self {
        let state = AppState::with_catalog(catalog, page_size, TrackingTimeline::default());
        let router = routes::router()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .with_state(state.clone());

        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        json_response(self.request(request).await).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PUT", uri, body).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::delete(uri).body(Body::empty()).unwrap();
        json_response(self.request(request).await).await
    }

    async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        json_response(self.request(request).await).await
    }

    /// Create a cart and return its id.
    pub async fn create_cart(&self) -> String {
        let (status, body) = self.post("/api/cart", Value::Null).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }
}

/// Split a response into its status and JSON body (`Null` when empty).
pub async fn json_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
