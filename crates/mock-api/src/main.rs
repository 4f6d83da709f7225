//! Mock upstream directory server.
//!
//! ## Purpose
//! Serves the bundled upstream-shaped practitioner fixture over HTTP so the
//! client path can be exercised end to end without the real remote.
//!
//! ## Intended use
//! Development and testing only. The fixture is served verbatim, raw wire
//! shape included; all filtering happens client-side in the consumers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIXTURE: &str = include_str!("../data/practitioners.json");

#[derive(Clone)]
struct AppState {
    document: Arc<serde_json::Value>,
}

#[derive(Serialize)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Main entry point for the mock directory server.
///
/// # Environment Variables
/// - `HEALNET_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the bundled fixture is not valid JSON, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healnet_mock_api=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HEALNET_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let document: serde_json::Value = serde_json::from_str(FIXTURE)?;
    anyhow::ensure!(document.is_array(), "fixture must be a JSON array");

    tracing::info!("-- Starting HealNet mock directory on {}", addr);

    let state = AppState {
        document: Arc::new(document),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/practitioners", get(practitioners))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint, used to tell "server down" apart from "bad
/// fixture" while developing.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "HealNet mock directory is alive".into(),
    })
}

/// The full raw directory document, exactly as bundled.
async fn practitioners(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.document.as_ref().clone())
}
