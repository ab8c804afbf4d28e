//! Swimlevel progression API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("engine=debug".parse()?)
                .add_directive("api=debug".parse()?),
        )
        .init();

    info!("🏊 Starting Swimlevel progression API");

    // Load configuration
    let config = common::Config::from_env();

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), pool));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/users/:id/experience",
            post(routes::progression::grant),
        )
        .route(
            "/api/users/:id/badges",
            get(routes::badges::list).post(routes::badges::award),
        )
        .route("/api/users/:id/badges/check", post(routes::badges::check))
        .route(
            "/api/dashboard/students/:id",
            get(routes::dashboard::student),
        )
        .route(
            "/api/dashboard/instructors/:id",
            get(routes::dashboard::instructor),
        )
        .route("/api/rankings", get(routes::rankings::get))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
