//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::listing::DEFAULT_PER_PAGE;

/// Upper bound for `LISTING_PAGE_SIZE`.
pub const MAX_PAGE_SIZE: usize = 100;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Restaurants per listing page (default: 8, capped at 100).
    pub page_size: usize,

    /// JSON catalog to serve instead of the built-in placeholder catalog.
    pub catalog_path: Option<PathBuf>,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Seconds after placement before an order shows as preparing (default: 5).
    pub tracking_preparing_after_secs: i64,

    /// Seconds after placement before an order shows as out for delivery (default: 10).
    pub tracking_dispatch_after_secs: i64,

    /// Seconds without changes before an open cart is dropped (default: 3600).
    pub cart_idle_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            page_size: DEFAULT_PER_PAGE,
            catalog_path: None,
            cors_allowed_origins: vec!["*".to_string()],
            tracking_preparing_after_secs: 5,
            tracking_dispatch_after_secs: 10,
            cart_idle_timeout_secs: 3600,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let requested_page_size: usize = env::var("LISTING_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PER_PAGE.to_string())
            .parse()
            .context("LISTING_PAGE_SIZE must be a positive integer")?;
        let page_size = clamp_page_size(requested_page_size);

        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let tracking_preparing_after_secs = env::var("TRACKING_PREPARING_AFTER_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("TRACKING_PREPARING_AFTER_SECS must be an integer")?;

        let tracking_dispatch_after_secs = env::var("TRACKING_DISPATCH_AFTER_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("TRACKING_DISPATCH_AFTER_SECS must be an integer")?;

        let cart_idle_timeout_secs = env::var("CART_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .context("CART_IDLE_TIMEOUT_SECS must be a non-negative integer")?;

        Ok(Self {
            port,
            page_size,
            catalog_path,
            cors_allowed_origins,
            tracking_preparing_after_secs,
            tracking_dispatch_after_secs,
            cart_idle_timeout_secs,
        })
    }
}

/// Keep the page size within `1..=MAX_PAGE_SIZE`.
fn clamp_page_size(requested: usize) -> usize {
    if requested > MAX_PAGE_SIZE {
        warn!(
            requested,
            max = MAX_PAGE_SIZE,
            "LISTING_PAGE_SIZE exceeds maximum, capping"
        );
        MAX_PAGE_SIZE
    } else {
        requested.max(1)
    }
}
