//! Shopping cart.
//!
//! Carts live in memory only. Prices come from the catalog menu at the time
//! an item is added, and checkout hands the cart over to the order service.

mod service;
mod types;

pub use service::CartService;
pub use types::{
    Cart, CartError, CartLine, CartTotals, PROMO_CODE, PromoStatus, SHIPPING_FEE_CENTS,
};
