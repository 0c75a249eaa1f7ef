//! Assessment API Server - Backend for exempt development checks
//!
//! Provides REST endpoints for:
//! - Structure rule tables and incremental active-rule resolution
//! - Sample property lookup
//! - Full exempt-development assessments

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod properties;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("assessment_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state (validates the rule tables)
    info!("Initializing Assessment API...");
    let state = Arc::new(AppState::new()?);

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Rule tables
        .route("/api/structures", get(handlers::list_structures))
        .route(
            "/api/structures/:structure/requirements",
            get(handlers::get_requirements),
        )
        .route(
            "/api/structures/:structure/requirements/active",
            post(handlers::active_requirements),
        )
        // Sample properties
        .route("/api/properties", get(handlers::list_properties))
        .route("/api/properties/:id", get(handlers::get_property))
        // Assessment
        .route("/api/assess", post(handlers::assess))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Assessment API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
