//! Order and tracking types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{CartLine, CartTotals};

/// Delivery progress, in the order an order moves through it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const SEQUENCE: [OrderStatus; 4] = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Position in [`OrderStatus::SEQUENCE`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Share of the sequence completed, 25 to 100.
    pub fn progress_percent(self) -> u8 {
        ((self.index() + 1) * 100 / Self::SEQUENCE.len()) as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Food Being Prepared",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Your order has been confirmed by the restaurant.",
            OrderStatus::Preparing => "The restaurant is preparing your food.",
            OrderStatus::OutForDelivery => "Your order is out for delivery!",
            OrderStatus::Delivered => "Your order has been delivered. Enjoy your meal!",
        }
    }
}

/// Fixed offsets after placement at which a simulated order advances.
///
/// There is no automatic step to [`OrderStatus::Delivered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingTimeline {
    pub preparing_after: Duration,
    pub dispatch_after: Duration,
}

impl Default for TrackingTimeline {
    fn default() -> Self {
        Self {
            preparing_after: Duration::seconds(5),
            dispatch_after: Duration::seconds(10),
        }
    }
}

impl TrackingTimeline {
    /// Simulated status `elapsed` after placement.
    pub fn status_after(&self, elapsed: Duration) -> OrderStatus {
        if elapsed < self.preparing_after {
            OrderStatus::Confirmed
        } else if elapsed < self.dispatch_after {
            OrderStatus::Preparing
        } else {
            OrderStatus::OutForDelivery
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub subtotal_cents: u64,
    pub shipping_cents: u64,
    pub discount_cents: u64,
    pub total_cents: u64,
    pub placed_at: DateTime<Utc>,
    /// Set once the courier confirms delivery.
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(lines: Vec<CartLine>, totals: CartTotals, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            lines,
            subtotal_cents: totals.subtotal_cents,
            shipping_cents: totals.shipping_cents,
            discount_cents: totals.discount_cents,
            total_cents: totals.total_cents,
            placed_at,
            delivered_at: None,
        }
    }

    /// Status as of `now`.
    pub fn status_at(&self, now: DateTime<Utc>, timeline: &TrackingTimeline) -> OrderStatus {
        if self.delivered_at.is_some() {
            return OrderStatus::Delivered;
        }
        timeline.status_after(now - self.placed_at)
    }

    /// Tracking milestones as of `now`, each flagged when reached.
    pub fn milestones(&self, now: DateTime<Utc>, timeline: &TrackingTimeline) -> Vec<Milestone> {
        let current = self.status_at(now, timeline);

        OrderStatus::SEQUENCE
            .iter()
            .map(|&status| Milestone {
                status,
                label: status.label(),
                completed: status <= current,
                reached_at: self.reached_at(status, timeline),
            })
            .collect()
    }

    /// One row of the order history as of `now`.
    pub fn summary(&self, now: DateTime<Utc>, timeline: &TrackingTimeline) -> OrderSummary {
        OrderSummary {
            id: self.id,
            placed_at: self.placed_at,
            status: self.status_at(now, timeline),
            total_cents: self.total_cents,
            items_preview: self.items_preview(),
        }
    }

    /// Item names joined for display, e.g. "Margherita Pizza (2), Tiramisu".
    pub fn items_preview(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line.quantity {
                1 => line.name.clone(),
                n => format!("{} ({n})", line.name),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Scheduled time a milestone is reached, when it is time-driven.
    fn reached_at(
        &self,
        status: OrderStatus,
        timeline: &TrackingTimeline,
    ) -> Option<DateTime<Utc>> {
        match status {
            OrderStatus::Confirmed => Some(self.placed_at),
            OrderStatus::Preparing => Some(self.placed_at + timeline.preparing_after),
            OrderStatus::OutForDelivery => Some(self.placed_at + timeline.dispatch_after),
            OrderStatus::Delivered => self.delivered_at,
        }
    }
}

/// One step on the tracking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub status: OrderStatus,
    pub label: &'static str,
    pub completed: bool,
    pub reached_at: Option<DateTime<Utc>>,
}

/// Order history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_cents: u64,
    pub items_preview: String,
}
