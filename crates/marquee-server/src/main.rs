//! Marquee Movie Service
//!
//! A small HTTP server exposing an in-memory movie catalog: genre listing,
//! movie queries joined with director records, and an append-only add-movie
//! endpoint. Also hosts the browser UI from a static directory.

mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::handler::HandlerWithoutStateExt;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use services::CatalogService;
use storage::CatalogStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Marquee Movie Service v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    // Load configuration
    let config = load_config().context("Failed to load configuration")?;
    info!(
        "Config loaded: port={}, static_dir={}",
        config.port,
        config.static_dir.display()
    );

    // Seed the in-memory catalog; a restart resets it to this state
    let store = Arc::new(CatalogStore::with_seed_data());
    let catalog = Arc::new(CatalogService::new(store));
    info!(
        "Catalog seeded: {} movies, {} genres",
        catalog.query_movies(None).map(|m| m.len()).unwrap_or(0),
        catalog.genres().len()
    );

    let state = AppState { catalog };
    let app = app_router(state, &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn app_router(state: AppState, static_dir: &Path) -> Router {
    // Anything the API routes and the static directory both miss gets the
    // plain-text 400 catch-all, including non-GET methods on routed paths.
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(handlers::invalid_request.into_service());

    Router::new()
        .route(
            "/genres",
            get(handlers::genres::list).fallback(handlers::invalid_request),
        )
        .route(
            "/movies",
            get(handlers::movies::list).fallback(handlers::invalid_request),
        )
        .route(
            "/addMovie",
            post(handlers::movies::add).fallback(handlers::invalid_request),
        )
        .route(
            "/info",
            get(handlers::info::info).fallback(handlers::invalid_request),
        )
        // Browser UI and the 400 catch-all
        .fallback_service(static_files)
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Clone)]
struct Config {
    port: u16,
    static_dir: PathBuf,
}

fn load_config() -> Result<Config> {
    let port = match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value))?,
        Err(_) => 3000,
    };

    let static_dir = std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"));

    Ok(Config { port, static_dir })
}
