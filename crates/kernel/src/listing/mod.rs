//! Restaurant listing engine.
//!
//! This module provides:
//! - query: pure search/filter/sort/paginate pipeline over the catalog
//! - QueryState: visitor inputs, buildable from URL query parameters
//! - PagerControls: page link window for the rendered pager

mod engine;
mod pager;
mod params;
pub mod types;

pub use engine::{filter, query, sort};
pub use pager::{PagerControls, PagerLink, window};
pub use types::{
    CuisineFilter, DEFAULT_PER_PAGE, ListingPage, QueryState, SortKey, clamp_page,
};
