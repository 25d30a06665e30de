//! In-memory review store.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::catalog::{Catalog, Review};

/// Name shown when a reviewer leaves theirs blank.
const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("restaurant not found")]
    RestaurantNotFound,

    #[error("review text is empty")]
    EmptyReview,

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}

/// A review as submitted from the detail screen.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: u8,
    pub text: String,
}

/// Service for restaurant reviews, keyed by restaurant id.
#[derive(Clone)]
pub struct ReviewService {
    catalog: Arc<Catalog>,
    reviews: Arc<DashMap<String, Vec<Review>>>,
}

impl ReviewService {
    /// Create a new review service seeded with the catalog's reviews.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let reviews: DashMap<String, Vec<Review>> = DashMap::new();
        for review in &catalog.reviews {
            reviews
                .entry(review.restaurant_id.clone())
                .or_default()
                .push(review.clone());
        }

        Self {
            catalog,
            reviews: Arc::new(reviews),
        }
    }

    /// Reviews for a restaurant, newest first.
    pub fn list(&self, restaurant_id: &str) -> Result<Vec<Review>, ReviewError> {
        if self.catalog.restaurant(restaurant_id).is_none() {
            return Err(ReviewError::RestaurantNotFound);
        }

        Ok(self
            .reviews
            .get(restaurant_id)
            .map(|reviews| reviews.value().clone())
            .unwrap_or_default())
    }

    /// Add a review dated `today`. Blank text is rejected.
    pub fn submit(
        &self,
        restaurant_id: &str,
        new: NewReview,
        today: NaiveDate,
    ) -> Result<Review, ReviewError> {
        if self.catalog.restaurant(restaurant_id).is_none() {
            return Err(ReviewError::RestaurantNotFound);
        }
        let text = new.text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyReview);
        }
        if !(1..=5).contains(&new.rating) {
            return Err(ReviewError::RatingOutOfRange(new.rating));
        }

        let user_name = new
            .user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS);

        let review = Review {
            id: Uuid::now_v7().to_string(),
            restaurant_id: restaurant_id.to_string(),
            user_name: user_name.to_string(),
            rating: new.rating,
            text: text.to_string(),
            date: today,
        };

        self.reviews
            .entry(restaurant_id.to_string())
            .or_default()
            .insert(0, review.clone());

        info!(restaurant_id, review_id = %review.id, rating = review.rating, "review submitted");
        Ok(review)
    }
}
