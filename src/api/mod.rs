//! HTTP layer exposing clause analysis and term recognition.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::pipeline::Analyzer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

/// Routes without transport concerns, shared by the server and tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/terms", get(routes::list_terms))
        .route("/recognize", post(routes::recognize))
        .route("/analyze", post(routes::analyze))
        .with_state(state)
}

pub async fn serve(analyzer: Analyzer, host: String, port: u16) -> Result<()> {
    let state = AppState {
        analyzer: Arc::new(analyzer),
    };
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving clausease API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
