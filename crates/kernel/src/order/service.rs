//! In-memory order store and tracking views.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::types::{Milestone, Order, OrderStatus, OrderSummary, TrackingTimeline};
use crate::cart::Cart;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order not found")]
    NotFound,
}

/// Everything the tracking screen shows for one order.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub order: Order,
    pub status: OrderStatus,
    pub message: &'static str,
    pub progress_percent: u8,
    pub milestones: Vec<Milestone>,
}

/// Service for placed orders.
#[derive(Clone)]
pub struct OrderService {
    timeline: TrackingTimeline,
    orders: Arc<DashMap<Uuid, Order>>,
}

impl OrderService {
    pub fn new(timeline: TrackingTimeline) -> Self {
        Self {
            timeline,
            orders: Arc::new(DashMap::new()),
        }
    }

    pub fn timeline(&self) -> &TrackingTimeline {
        &self.timeline
    }

    /// Turn a checked-out cart into an order placed now.
    pub fn place(&self, cart: Cart) -> Order {
        self.place_at(cart, Utc::now())
    }

    /// Turn a checked-out cart into an order placed at `placed_at`.
    pub fn place_at(&self, cart: Cart, placed_at: DateTime<Utc>) -> Order {
        let totals = cart.totals();
        let order = Order::new(cart.lines, totals, placed_at);

        info!(
            order_id = %order.id,
            total_cents = order.total_cents,
            "order placed"
        );

        self.orders.insert(order.id, order.clone());
        order
    }

    pub fn get(&self, id: Uuid) -> Result<Order, OrderError> {
        self.orders
            .get(&id)
            .map(|order| order.value().clone())
            .ok_or(OrderError::NotFound)
    }

    /// Tracking view as of `now`.
    pub fn tracking(&self, id: Uuid, now: DateTime<Utc>) -> Result<TrackingView, OrderError> {
        let order = self.get(id)?;
        let status = order.status_at(now, &self.timeline);
        let milestones = order.milestones(now, &self.timeline);

        Ok(TrackingView {
            order,
            status,
            message: status.message(),
            progress_percent: status.progress_percent(),
            milestones,
        })
    }

    /// Order history as of `now`, newest first.
    pub fn list(&self, now: DateTime<Utc>) -> Vec<OrderSummary> {
        let mut summaries: Vec<OrderSummary> = self
            .orders
            .iter()
            .map(|order| order.summary(now, &self.timeline))
            .collect();

        summaries.sort_by(|a, b| b.placed_at.cmp(&a.placed_at).then(b.id.cmp(&a.id)));
        summaries
    }

    /// Record delivery. Repeated calls keep the first delivery time.
    pub fn mark_delivered(&self, id: Uuid, at: DateTime<Utc>) -> Result<Order, OrderError> {
        let mut order = self.orders.get_mut(&id).ok_or(OrderError::NotFound)?;

        if order.delivered_at.is_none() {
            order.delivered_at = Some(at);
            info!(order_id = %id, "order delivered");
        }

        Ok(order.value().clone())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
