//! Catalog record types.
//!
//! Records are read-only once loaded; the listing engine and the cart only
//! ever borrow them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A restaurant as shown on listing and detail screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Card image.
    #[serde(default)]
    pub image_url: String,

    /// Category labels in display order (e.g. `["Italian", "Pizza"]`).
    #[serde(default)]
    pub cuisine_types: Vec<String>,

    /// Average rating, 0.0 to 5.0.
    pub rating: f64,

    /// Number of reviews behind the rating, when known.
    #[serde(default)]
    pub review_count: Option<u32>,

    /// Delivery window such as "20-30 min".
    pub delivery_time: String,

    /// Promotion badge text.
    #[serde(default)]
    pub promotion: Option<String>,

    /// Static open flag (there is no clock behind it).
    #[serde(default)]
    pub is_open: bool,

    #[serde(default)]
    pub has_free_delivery: bool,
}

impl RestaurantRecord {
    /// Lower bound of the delivery window in minutes.
    ///
    /// Reads the leading digits after optional whitespace. Anything that does
    /// not start with a digit, or overflows, counts as 0 so a malformed
    /// window sorts first instead of failing the whole listing.
    pub fn delivery_lower_bound(&self) -> u32 {
        let trimmed = self.delivery_time.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        trimmed[..end].parse().unwrap_or(0)
    }

    /// Whether any cuisine label equals `label` exactly.
    pub fn has_cuisine(&self, label: &str) -> bool {
        self.cuisine_types.iter().any(|c| c == label)
    }
}

/// Homepage cuisine shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineEntry {
    pub id: String,
    pub name: String,
    pub art: CuisineArt,
}

/// Artwork for a cuisine shortcut, resolved by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CuisineArt {
    /// Remote image.
    Image { url: String },
    /// Symbolic icon name from the renderer's icon set.
    Icon { symbol: String },
}

/// A menu section on the restaurant detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents.
    pub price_cents: u64,
    #[serde(default)]
    pub image_url: String,
    /// Item opens a customization dialog before it can be added.
    #[serde(default)]
    pub customization_required: bool,
}

/// A customer review shown on the restaurant detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
}
