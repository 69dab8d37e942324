//! HTTP surface.
//!
//! - `GET /?code=...`    : exchange an authorization code and store the token
//! - `GET /token/refresh`: refresh the stored token

pub mod routes;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::SharedState;

pub fn router(state: SharedState) -> Router {
    routes::token_router(state).layer(TraceLayer::new_for_http())
}

/// Bind every interface on the configured port and serve until shutdown.
pub async fn serve(state: SharedState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Starting server {}", state.config.redirect_uri());
    axum::serve(listener, router(state)).await?;

    Ok(())
}
