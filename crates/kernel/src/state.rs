//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use chrono::Duration;
use tracing::info;

use crate::cart::CartService;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::order::{OrderService, TrackingTimeline};
use crate::review::ReviewService;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Read-only restaurant catalog.
    catalog: Arc<Catalog>,

    /// Restaurants per listing page.
    page_size: usize,

    carts: CartService,

    orders: OrderService,

    reviews: ReviewService,
}

impl AppState {
    /// Build state from configuration, loading the catalog file if one is set.
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => Catalog::seeded(),
        };

        info!(
            restaurants = catalog.len(),
            cuisines = catalog.cuisines.len(),
            "catalog ready"
        );

        let timeline = timeline_from_config(config)?;
        Ok(Self::with_catalog(catalog, config.page_size, timeline))
    }

    /// Build state around an existing catalog.
    pub fn with_catalog(catalog: Catalog, page_size: usize, timeline: TrackingTimeline) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            inner: Arc::new(AppStateInner {
                carts: CartService::new(catalog.clone()),
                orders: OrderService::new(timeline),
                reviews: ReviewService::new(catalog.clone()),
                catalog,
                page_size: page_size.max(1),
            }),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn page_size(&self) -> usize {
        self.inner.page_size
    }

    pub fn carts(&self) -> &CartService {
        &self.inner.carts
    }

    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }

    pub fn reviews(&self) -> &ReviewService {
        &self.inner.reviews
    }
}

fn timeline_from_config(config: &Config) -> Result<TrackingTimeline> {
    let preparing_after = config.tracking_preparing_after_secs;
    let dispatch_after = config.tracking_dispatch_after_secs;

    ensure!(
        preparing_after >= 0 && dispatch_after >= preparing_after,
        "tracking timeline must satisfy 0 <= preparing ({preparing_after}s) <= dispatch ({dispatch_after}s)"
    );

    Ok(TrackingTimeline {
        preparing_after: Duration::seconds(preparing_after),
        dispatch_after: Duration::seconds(dispatch_after),
    })
}
