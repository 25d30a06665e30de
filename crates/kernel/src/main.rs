//! Platter storefront server.
//!
//! Serves the restaurant listing, carts and order tracking over HTTP.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use platter_kernel::catalog::Catalog;
use platter_kernel::{AppState, Config, routes};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a catalog JSON file and exit
    CheckCatalog {
        /// Path to the catalog file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    if let Some(Command::CheckCatalog { path }) = args.command {
        return check_catalog(&path);
    }

    info!("Starting Platter storefront");

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.port = port;
    }
    info!(
        port = config.port,
        page_size = config.page_size,
        "Configuration loaded"
    );

    let state = AppState::new(&config).context("failed to initialize application state")?;

    spawn_cart_purge(state.clone(), config.cart_idle_timeout_secs);

    let cors = build_cors_layer(&config);

    let app = routes::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// How often idle carts are swept.
const CART_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drop carts nobody has touched for `idle_secs`.
fn spawn_cart_purge(state: AppState, idle_secs: u64) {
    let idle = i64::try_from(idle_secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .unwrap_or(chrono::Duration::MAX);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CART_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Some(cutoff) = Utc::now().checked_sub_signed(idle) {
                state.carts().purge_idle(cutoff);
            }
        }
    });

    info!(idle_secs, "cart purge task started");
}

fn check_catalog(path: &Path) -> Result<()> {
    let catalog = Catalog::from_json_file(path)
        .with_context(|| format!("invalid catalog {}", path.display()))?;

    info!(
        path = %path.display(),
        restaurants = catalog.len(),
        cuisines = catalog.cuisines.len(),
        menu_items = catalog.menu.iter().map(|c| c.items.len()).sum::<usize>(),
        "Catalog is valid"
    );

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("platter=info,platter_kernel=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
