//! Application error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::cart::CartError;
use crate::order::OrderError;
use crate::review::ReviewError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        };

        let error = self.to_string();
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::CartNotFound => AppError::NotFound("cart"),
            CartError::UnknownMenuItem(_) => AppError::BadRequest(err.to_string()),
            CartError::LineNotFound(_) => AppError::NotFound("cart line"),
            CartError::EmptyCart => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound => AppError::NotFound("order"),
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::RestaurantNotFound => AppError::NotFound("restaurant"),
            ReviewError::EmptyReview | ReviewError::RatingOutOfRange(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
