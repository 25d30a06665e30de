//! Platter test utilities.
//!
//! Helpers for integration testing: restaurant fixture builders, small
//! catalogs and assertion helpers for listing results.

use platter_kernel::catalog::{Catalog, RestaurantRecord};

/// Create an open test restaurant with default values.
pub fn test_restaurant(id: &str, name: &str) -> TestRestaurant {
    TestRestaurant {
        record: RestaurantRecord {
            id: id.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            cuisine_types: Vec::new(),
            rating: 4.0,
            review_count: None,
            delivery_time: "20-30 min".to_string(),
            promotion: None,
            is_open: true,
            has_free_delivery: false,
        },
    }
}

/// A restaurant builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestRestaurant {
    record: RestaurantRecord,
}

impl TestRestaurant {
    /// Set cuisine labels.
    pub fn with_cuisines(mut self, cuisines: &[&str]) -> Self {
        self.record.cuisine_types = cuisines.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.record.rating = rating;
        self
    }

    /// Set the delivery window text, e.g. `"15-25 min"`.
    pub fn with_delivery_time(mut self, delivery_time: &str) -> Self {
        self.record.delivery_time = delivery_time.to_string();
        self
    }

    pub fn with_promotion(mut self, promotion: &str) -> Self {
        self.record.promotion = Some(promotion.to_string());
        self
    }

    /// Mark as closed.
    pub fn closed(mut self) -> Self {
        self.record.is_open = false;
        self
    }

    /// Mark as offering free delivery.
    pub fn free_delivery(mut self) -> Self {
        self.record.has_free_delivery = true;
        self
    }

    pub fn build(self) -> RestaurantRecord {
        self.record
    }
}

/// `count` open restaurants named "Restaurant 1", "Restaurant 2", ...
///
/// Ratings step down from 5.0 so the default rating sort keeps id order.
pub fn numbered_restaurants(count: usize) -> Vec<RestaurantRecord> {
    (1..=count)
        .map(|n| {
            test_restaurant(&n.to_string(), &format!("Restaurant {n}"))
                .with_cuisines(&["Test"])
                .with_rating(5.0 - n as f64 * 0.001)
                .build()
        })
        .collect()
}

/// A catalog holding `restaurants` plus the built-in cuisines and menu.
///
/// Featured ids and reviews refer to the built-in restaurants, so both
/// start empty.
pub fn catalog_of(restaurants: Vec<RestaurantRecord>) -> Catalog {
    Catalog {
        restaurants,
        featured: Vec::new(),
        reviews: Vec::new(),
        ..Catalog::seeded()
    }
}

/// Ids of `records`, in order.
pub fn ids<'a>(records: impl IntoIterator<Item = &'a RestaurantRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}

/// Assertion helpers for JSON responses.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert the `id` fields of a JSON array of restaurants.
    pub fn restaurant_ids(items: &Value, expected: &[&str]) {
        let actual: Vec<&str> = items
            .as_array()
            .map(|items| items.iter().filter_map(|r| r["id"].as_str()).collect())
            .unwrap_or_default();

        assert_eq!(actual, expected, "restaurant ids mismatch in {items}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_builder() {
        let record = test_restaurant("r1", "Pasta Place")
            .with_cuisines(&["Italian"])
            .with_rating(4.2)
            .closed()
            .free_delivery()
            .build();

        assert_eq!(record.id, "r1");
        assert!(!record.is_open);
        assert!(record.has_free_delivery);
        assert!(record.has_cuisine("Italian"));
    }

    #[test]
    fn numbered_restaurants_descend_by_rating() {
        let records = numbered_restaurants(3);
        assert_eq!(ids(&records), vec!["1", "2", "3"]);
        assert!(records[0].rating > records[2].rating);
    }

    #[test]
    fn catalog_of_keeps_menu() {
        let catalog = catalog_of(numbered_restaurants(2));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.menu_item("m1").is_some());
        assert!(catalog.featured().is_empty());
        assert!(catalog.reviews.is_empty());
    }
}
