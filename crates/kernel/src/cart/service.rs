//! In-memory cart store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{Cart, CartError, PromoStatus};
use crate::catalog::Catalog;

/// A cart plus the last time the visitor touched it.
#[derive(Debug, Clone)]
struct OpenCart {
    cart: Cart,
    touched_at: DateTime<Utc>,
}

impl OpenCart {
    fn new() -> Self {
        Self {
            cart: Cart::new(),
            touched_at: Utc::now(),
        }
    }
}

/// Service holding every open cart, keyed by cart id.
///
/// Carts nobody touches are dropped by [`CartService::purge_idle`].
#[derive(Clone)]
pub struct CartService {
    catalog: Arc<Catalog>,
    carts: Arc<DashMap<Uuid, OpenCart>>,
}

impl CartService {
    /// Create a new cart service pricing items from `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            carts: Arc::new(DashMap::new()),
        }
    }

    /// Open an empty cart.
    pub fn create(&self) -> Uuid {
        let id = Uuid::now_v7();
        self.carts.insert(id, OpenCart::new());

        debug!(cart_id = %id, "cart created");
        id
    }

    /// Snapshot of a cart.
    pub fn get(&self, id: Uuid) -> Result<Cart, CartError> {
        self.carts
            .get(&id)
            .map(|open| open.cart.clone())
            .ok_or(CartError::CartNotFound)
    }

    /// Add a menu item by id.
    pub fn add_item(
        &self,
        id: Uuid,
        menu_item_id: &str,
        quantity: u32,
        restaurant_id: Option<&str>,
    ) -> Result<Cart, CartError> {
        let item = self
            .catalog
            .menu_item(menu_item_id)
            .ok_or_else(|| CartError::UnknownMenuItem(menu_item_id.to_string()))?;

        self.update(id, |cart| {
            cart.add(item, quantity, restaurant_id);
            Ok(())
        })
    }

    pub fn set_quantity(
        &self,
        id: Uuid,
        menu_item_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        self.update(id, |cart| cart.set_quantity(menu_item_id, quantity))
    }

    pub fn remove_item(&self, id: Uuid, menu_item_id: &str) -> Result<Cart, CartError> {
        self.update(id, |cart| cart.remove(menu_item_id).map(|_| ()))
    }

    /// Enter a promo code on a cart.
    pub fn apply_promo(&self, id: Uuid, code: &str) -> Result<(PromoStatus, Cart), CartError> {
        let mut status = PromoStatus::Incomplete;
        let cart = self.update(id, |cart| {
            status = cart.apply_promo(code);
            Ok(())
        })?;

        debug!(cart_id = %id, ?status, "promo code entered");
        Ok((status, cart))
    }

    /// Remove a non-empty cart so it can be turned into an order.
    ///
    /// An empty cart stays open and yields [`CartError::EmptyCart`].
    pub fn take_for_checkout(&self, id: Uuid) -> Result<Cart, CartError> {
        match self.carts.remove_if(&id, |_, open| !open.cart.is_empty()) {
            Some((_, OpenCart { cart, .. })) => {
                info!(
                    cart_id = %id,
                    items = cart.item_count(),
                    "cart checked out"
                );
                Ok(cart)
            }
            None if self.carts.contains_key(&id) => Err(CartError::EmptyCart),
            None => Err(CartError::CartNotFound),
        }
    }

    /// Drop carts last touched before `cutoff`. Returns how many were dropped.
    pub fn purge_idle(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.carts.len();
        self.carts.retain(|_, open| open.touched_at >= cutoff);
        let purged = before.saturating_sub(self.carts.len());

        if purged > 0 {
            info!(purged, "idle carts purged");
        }
        purged
    }

    /// Number of open carts.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    fn update<F>(&self, id: Uuid, f: F) -> Result<Cart, CartError>
    where
        F: FnOnce(&mut Cart) -> Result<(), CartError>,
    {
        let mut open = self.carts.get_mut(&id).ok_or(CartError::CartNotFound)?;
        f(&mut open.cart)?;
        open.touched_at = Utc::now();
        Ok(open.cart.clone())
    }
}
