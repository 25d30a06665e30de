//! Cart types and price arithmetic.
//!
//! All amounts are integer cents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::MenuItem;

/// Flat delivery fee charged on any non-empty cart.
pub const SHIPPING_FEE_CENTS: u64 = 500;

/// The only promo code the storefront honours.
pub const PROMO_CODE: &str = "SAVE10";

/// Discount granted by [`PROMO_CODE`], in percent of the subtotal.
const PROMO_PERCENT: u64 = 10;

/// Promo codes are entered in a fixed-width six character field.
const PROMO_CODE_LEN: usize = 6;

/// Cart operation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("cart not found")]
    CartNotFound,

    #[error("menu item '{0}' does not exist")]
    UnknownMenuItem(String),

    #[error("menu item '{0}' is not in the cart")]
    LineNotFound(String),

    #[error("cart is empty")]
    EmptyCart,
}

/// One menu item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
    /// Restaurant the item was ordered from, when known.
    pub restaurant_id: Option<String>,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents * u64::from(self.quantity)
    }
}

/// Price breakdown of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal_cents: u64,
    pub shipping_cents: u64,
    pub discount_cents: u64,
    pub total_cents: u64,
}

/// Outcome of entering a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromoStatus {
    /// Code accepted; the discount applies from now on.
    Applied { discount_cents: u64 },
    /// A complete code that is not recognised.
    Invalid,
    /// Partial input, neither accepted nor rejected yet.
    Incomplete,
}

/// A visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,

    /// Accepted promo code, if any.
    pub promo_code: Option<String>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Add `quantity` units of `item`, merging with an existing line.
    ///
    /// A quantity of 0 adds a single unit.
    pub fn add(&mut self, item: &MenuItem, quantity: u32, restaurant_id: Option<&str>) {
        let quantity = quantity.max(1);

        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
            restaurant_id: restaurant_id.map(str::to_string),
        });
    }

    /// Set a line's quantity. Quantities below 1 are raised to 1; use
    /// [`Cart::remove`] to drop a line.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: u32) -> Result<(), CartError> {
        let line = self
            .line_mut(menu_item_id)
            .ok_or_else(|| CartError::LineNotFound(menu_item_id.to_string()))?;
        line.quantity = quantity.max(1);
        Ok(())
    }

    pub fn remove(&mut self, menu_item_id: &str) -> Result<CartLine, CartError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.menu_item_id == menu_item_id)
            .ok_or_else(|| CartError::LineNotFound(menu_item_id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Enter a promo code. Only an accepted code is kept on the cart; any
    /// other input clears a previously accepted one.
    pub fn apply_promo(&mut self, code: &str) -> PromoStatus {
        let code = code.trim();

        if code.eq_ignore_ascii_case(PROMO_CODE) {
            self.promo_code = Some(PROMO_CODE.to_string());
            return PromoStatus::Applied {
                discount_cents: self.totals().discount_cents,
            };
        }

        self.promo_code = None;
        if code.chars().count() == PROMO_CODE_LEN {
            PromoStatus::Invalid
        } else {
            PromoStatus::Incomplete
        }
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    pub fn totals(&self) -> CartTotals {
        let subtotal_cents = self.subtotal_cents();
        let shipping_cents = if self.is_empty() {
            0
        } else {
            SHIPPING_FEE_CENTS
        };
        let discount_cents = if self.promo_code.is_some() {
            percent_of(subtotal_cents, PROMO_PERCENT)
        } else {
            0
        };

        CartTotals {
            subtotal_cents,
            shipping_cents,
            discount_cents,
            total_cents: subtotal_cents + shipping_cents - discount_cents,
        }
    }

    fn line_mut(&mut self, menu_item_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
    }
}

/// `percent`% of `cents`, rounded half up to the nearest cent.
fn percent_of(cents: u64, percent: u64) -> u64 {
    (cents * percent + 50) / 100
}
