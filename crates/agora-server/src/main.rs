// File: src/main.rs
// Purpose: Binary entry point - config, route registration, axum serving

mod board;
mod routes;

use std::sync::Arc;

use agora::{App, Config};
use anyhow::{Context, Result};
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::response::Response;
use tracing::{info, warn};

use crate::board::Board;

/// Largest form body the server will buffer.
const BODY_LIMIT: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|err| {
        warn!("failed to load config: {err:#}, using defaults");
        Config::default()
    });

    let board = Arc::new(Board::seeded());
    let mut app = App::new(&config);
    routes::register(&mut app, board).context("route registration failed")?;
    let app = Arc::new(app);

    // All paths funnel through the agora route table; axum only hosts it.
    let router = axum::Router::new().fallback(dispatch).with_state(app);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("agora listening on http://{addr}");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}

/// Bridges one axum request into the agora pipeline.
async fn dispatch(State(app): State<Arc<App>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT).await.unwrap_or_default();

    app.dispatch(
        &parts.method,
        parts.uri.path(),
        parts.uri.query().unwrap_or(""),
        parts.headers,
        bytes.to_vec(),
    )
}
