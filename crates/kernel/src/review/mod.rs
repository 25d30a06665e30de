//! Restaurant reviews.
//!
//! Reviews start from the catalog's seed set; new submissions are kept in
//! memory alongside them.

mod service;

pub use service::{NewReview, ReviewError, ReviewService};
