//! Orders and simulated delivery tracking.
//!
//! Orders are created from checked-out carts. Their status is derived from
//! the time since placement using a fixed timeline; only delivery is
//! recorded explicitly.

mod service;
mod types;

pub use service::{OrderError, OrderService, TrackingView};
pub use types::{Milestone, Order, OrderStatus, OrderSummary, TrackingTimeline};
