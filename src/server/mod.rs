use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::config::Config;
use crate::processor;
use crate::state::{SharedState, Snapshot};

mod page;

/// Handler context: read-only snapshots of the bot state plus the config
/// needed to launch a processor session.
#[derive(Clone)]
pub struct AppContext {
    pub shared: SharedState,
    pub config: Arc<Config>,
}

#[derive(Debug, Serialize)]
struct ControlResponse {
    running: bool,
    changed: bool,
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/data", get(data))
        .route("/start", post(start))
        .route("/stop", post(stop))
        .with_state(ctx)
}

pub async fn serve(ctx: AppContext, port: u16) -> Result<()> {
    let app = router(ctx);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tracing::info!(port, "dashboard listening");
    axum::serve(listener, app).await.context("server error")
}

async fn index() -> Html<&'static str> {
    Html(page::DASHBOARD_HTML)
}

async fn data(State(ctx): State<AppContext>) -> Json<Snapshot> {
    Json(ctx.shared.snapshot())
}

/// Idempotent start: spawns the processor task only when no session is
/// running.
async fn start(State(ctx): State<AppContext>) -> Json<ControlResponse> {
    let changed = ctx.shared.try_start();
    if changed {
        tracing::info!(symbol = %ctx.config.feed.symbol, "starting tick processor");
        tokio::spawn(processor::run(ctx.shared.clone(), ctx.config.clone()));
    } else {
        tracing::debug!("start requested but processor already running");
    }
    Json(ControlResponse {
        running: true,
        changed,
    })
}

/// Idempotent stop: clears the run flag; the loop exits within one receive
/// interval and closes the feed socket.
async fn stop(State(ctx): State<AppContext>) -> Json<ControlResponse> {
    let changed = ctx.shared.is_running();
    ctx.shared.request_stop();
    if changed {
        tracing::info!("stop requested");
    }
    Json(ControlResponse {
        running: false,
        changed,
    })
}
