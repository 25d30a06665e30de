//! Restaurant catalog.
//!
//! Holds the immutable restaurant collection, the homepage cuisine
//! shortcuts and the menu served on detail pages. The catalog is either the
//! built-in placeholder set or a JSON file loaded at startup.

mod seed;
mod types;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use types::{CuisineArt, CuisineEntry, MenuCategory, MenuItem, RestaurantRecord, Review};

/// Reasons a catalog is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate restaurant id '{0}'")]
    DuplicateRestaurant(String),

    #[error("restaurant '{id}' has rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange { id: String, rating: f64 },

    #[error("duplicate menu item id '{0}'")]
    DuplicateMenuItem(String),

    #[error("featured restaurant '{0}' is not in the catalog")]
    UnknownFeatured(String),

    #[error("review '{id}' is for unknown restaurant '{restaurant_id}'")]
    OrphanReview { id: String, restaurant_id: String },

    #[error("review '{id}' has rating {rating} outside 1..=5")]
    ReviewRatingOutOfRange { id: String, rating: u8 },
}

/// The full in-memory catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<RestaurantRecord>,

    #[serde(default)]
    pub cuisines: Vec<CuisineEntry>,

    #[serde(default)]
    pub menu: Vec<MenuCategory>,

    /// Restaurant ids shown in the homepage "Featured Restaurants" row.
    #[serde(default)]
    pub featured: Vec<String>,

    /// Reviews present at startup. New reviews are held by the review service.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Catalog {
    /// Built-in placeholder catalog.
    pub fn seeded() -> Self {
        Self {
            restaurants: seed::restaurants(),
            cuisines: seed::cuisines(),
            menu: seed::menu(),
            featured: seed::featured(),
            reviews: seed::reviews(),
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        debug!(
            path = %path.display(),
            restaurants = catalog.restaurants.len(),
            "catalog loaded from file"
        );

        Ok(catalog)
    }

    /// Check id uniqueness, rating bounds and that featured entries and
    /// reviews point at known restaurants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for r in &self.restaurants {
            if !seen.insert(r.id.as_str()) {
                return Err(CatalogError::DuplicateRestaurant(r.id.clone()));
            }
            if !r.rating.is_finite() || !(0.0..=5.0).contains(&r.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: r.id.clone(),
                    rating: r.rating,
                });
            }
        }

        let mut seen = HashSet::new();
        for item in self.menu.iter().flat_map(|c| &c.items) {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateMenuItem(item.id.clone()));
            }
        }

        if let Some(id) = self.featured.iter().find(|id| self.restaurant(id).is_none()) {
            return Err(CatalogError::UnknownFeatured(id.clone()));
        }

        for review in &self.reviews {
            if self.restaurant(&review.restaurant_id).is_none() {
                return Err(CatalogError::OrphanReview {
                    id: review.id.clone(),
                    restaurant_id: review.restaurant_id.clone(),
                });
            }
            if !(1..=5).contains(&review.rating) {
                return Err(CatalogError::ReviewRatingOutOfRange {
                    id: review.id.clone(),
                    rating: review.rating,
                });
            }
        }

        Ok(())
    }

    /// Look up a restaurant by id.
    pub fn restaurant(&self, id: &str) -> Option<&RestaurantRecord> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Look up a menu item by id across all categories.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu
            .iter()
            .flat_map(|c| &c.items)
            .find(|item| item.id == id)
    }

    /// Featured restaurants in display order.
    pub fn featured(&self) -> Vec<&RestaurantRecord> {
        self.featured
            .iter()
            .filter_map(|id| self.restaurant(id))
            .collect()
    }

    /// Distinct cuisine labels across all restaurants, sorted.
    ///
    /// These are the options offered by the listing's cuisine filter.
    pub fn unique_cuisines(&self) -> Vec<String> {
        self.restaurants
            .iter()
            .flat_map(|r| r.cuisine_types.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
