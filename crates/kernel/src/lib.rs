//! Platter Storefront Kernel Library
//!
//! The restaurant catalog, the listing query engine, reviews, carts and
//! order tracking, plus the HTTP routes that serve them. The `platter` binary
//! wires these into a server.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod listing;
pub mod order;
pub mod review;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
