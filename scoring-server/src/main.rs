//! Credit Scoring API Server
//!
//! Serves the trained default classifier over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CREDIT SCORING API                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  Prediction   │  │  Explanation        │ │
//! │  │  Router   │─▶│  Service      │  │  Service            │ │
//! │  │  (Axum)   │  │               │  │  (blocking pool)    │ │
//! │  └───────────┘  └───────┬───────┘  └──────────┬──────────┘ │
//! │                         └──────────┬───────────┘            │
//! │                                    ▼                        │
//! │                           ┌────────────────┐               │
//! │                           │  Model Store   │               │
//! │                           │  (read-only)   │               │
//! │                           └────────────────┘               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use credit_scoring_core::{build_explainer, Explainer, ModelStore};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "credit_scoring_server=debug,credit_scoring_core=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = config::Config::from_env();

    tracing::info!("Credit Scoring Server starting...");
    tracing::info!("Model: {}", config.model_path);
    if !config.is_production() {
        tracing::info!("Environment: {}", config.environment);
    }

    // Load the model once; the server never starts without it
    let store = match ModelStore::load(&config.model_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to load model from {}: {}", config.model_path, e);
            return Err(anyhow::Error::new(e).context("model store initialization failed"));
        }
    };

    let explainer = build_explainer(
        &store,
        config.explain_strategy,
        config.explain_samples,
        config.explain_seed,
    );
    tracing::info!(
        "Explainer: {} (samples={}, timeout={:?})",
        config.explain_strategy,
        config.explain_samples,
        config.explain_timeout
    );

    // Build application state
    let state = AppState {
        store,
        explainer,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ModelStore>,
    pub explainer: Arc<dyn Explainer>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/model", get(handlers::model::info))
        .route("/predict", post(handlers::predict::predict))
        .route("/explain", post(handlers::explain::explain))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
