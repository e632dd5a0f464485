//! Marquee Dashboard - Movie-ticket booking demo UI.
//!
//! This binary serves the booking dashboard on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for panel refreshes
//! - Askama templates for server-side rendering
//! - Remote booking API gateway for users, movies, and bookings - the
//!   gateway is the source of truth, this process keeps only an in-memory
//!   snapshot mirror for rendering
//! - Demo data is seeded once at startup, before the server binds

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use marquee_dashboard::config::DashboardConfig;
use marquee_dashboard::state::AppState;
use marquee_dashboard::{routes, seed};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marquee_dashboard=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state
    let state = AppState::new(config.clone());

    // Seed demo data before any rendering happens. Best-effort: failures
    // are logged inside and never abort startup.
    if config.skip_seed {
        tracing::info!("MARQUEE_SKIP_SEED set, skipping demo data seeding");
    } else {
        seed::seed_demo_data(state.client()).await;
    }

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/dashboard/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the gateway.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
