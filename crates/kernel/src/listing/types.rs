//! Listing query types.
//!
//! - QueryState: search text, filter selections, sort key and page
//! - SortKey / CuisineFilter: the selectable dimensions
//! - ListingPage: one window of ordered results plus paging figures

use serde::{Deserialize, Serialize};

use crate::catalog::RestaurantRecord;

/// Default number of restaurants per listing page.
pub const DEFAULT_PER_PAGE: usize = 8;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rating first.
    #[default]
    RatingDesc,
    /// Shortest delivery window first.
    DeliveryTimeAsc,
    /// Alphabetical by name.
    NameAsc,
    /// Catalog order, no reordering.
    Catalog,
}

impl SortKey {
    /// Parse a sort parameter. Unknown keys fall back to catalog order.
    pub fn from_param(value: &str) -> Self {
        match value {
            "rating" | "rating-desc" => SortKey::RatingDesc,
            "deliveryTime" | "delivery-time" | "delivery-time-asc" => SortKey::DeliveryTimeAsc,
            "name" | "name-asc" => SortKey::NameAsc,
            _ => SortKey::Catalog,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating-desc",
            SortKey::DeliveryTimeAsc => "delivery-time-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::Catalog => "catalog",
        }
    }
}

/// Cuisine selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CuisineFilter {
    #[default]
    All,
    /// Exact, case-sensitive cuisine label.
    Only(String),
}

impl CuisineFilter {
    /// Parse a cuisine parameter; empty and `all` mean no restriction.
    pub fn from_param(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            CuisineFilter::All
        } else {
            CuisineFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        match self {
            CuisineFilter::All => true,
            CuisineFilter::Only(label) => record.has_cuisine(label),
        }
    }
}

/// Everything the visitor has chosen on the listing screen.
///
/// Changing any search, filter or sort input through the `with_*` helpers
/// sends the visitor back to page 1; [`QueryState::with_page`] is the only
/// helper that keeps the other inputs and moves the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryState {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub cuisine: CuisineFilter,

    #[serde(default)]
    pub free_delivery_only: bool,

    #[serde(default)]
    pub open_now_only: bool,

    #[serde(default)]
    pub sort: SortKey,

    /// Requested page, 1-based. Out-of-range values are clamped at query time.
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            cuisine: CuisineFilter::All,
            free_delivery_only: false,
            open_now_only: false,
            sort: SortKey::default(),
            page: default_page(),
        }
    }
}

impl QueryState {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_cuisine(self, cuisine: CuisineFilter) -> Self {
        Self {
            cuisine,
            page: 1,
            ..self
        }
    }

    pub fn with_free_delivery_only(self, free_delivery_only: bool) -> Self {
        Self {
            free_delivery_only,
            page: 1,
            ..self
        }
    }

    pub fn with_open_now_only(self, open_now_only: bool) -> Self {
        Self {
            open_now_only,
            page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: i64) -> Self {
        Self { page, ..self }
    }

    /// True when no search or filter narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.cuisine == CuisineFilter::All
            && !self.free_delivery_only
            && !self.open_now_only
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage<'a> {
    /// Records on the served page, in sort order.
    pub items: Vec<&'a RestaurantRecord>,

    /// Matches across all pages.
    pub total_matches: usize,

    /// Always at least 1, even with no matches.
    pub total_pages: usize,

    /// Served page after clamping (1-indexed).
    pub page: usize,

    pub per_page: usize,

    pub has_prev: bool,

    pub has_next: bool,
}

impl<'a> ListingPage<'a> {
    /// Cut the served window out of an already filtered and sorted list.
    pub fn from_matches(
        matches: Vec<&'a RestaurantRecord>,
        requested: i64,
        per_page: usize,
    ) -> Self {
        let per_page = per_page.max(1);
        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(per_page).max(1);
        let page = clamp_page(requested, total_pages);

        let start = (page - 1) * per_page;
        let items = matches.into_iter().skip(start).take(per_page).collect();

        Self {
            items,
            total_matches,
            total_pages,
            page,
            per_page,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(last, |p| p.min(last))
    }
}
