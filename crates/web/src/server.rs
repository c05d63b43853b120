//! Web server implementation

use crate::routes::{console_router, ConsoleState};
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use wgconsole_common::ConsoleConfig;

/// Web server state
pub struct WebServer {
    state: Arc<ConsoleState>,
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            state: Arc::new(ConsoleState::new(config)),
        }
    }

    /// Build the router: embedded UI at `/`, JSON API under `/api`
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .nest("/api", console_router(self.state.clone()))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Mesh console starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

async fn index_handler() -> impl IntoResponse {
    Html(include_str!("../static/index.html"))
}

/// Convenience entry point used by the binaries
pub async fn serve(addr: SocketAddr, config: ConsoleConfig) -> anyhow::Result<()> {
    WebServer::new(config).serve(addr).await
}
