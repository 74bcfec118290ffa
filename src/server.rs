//! Inbox server implementation

use anyhow::Result;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::preview;

/// Configuration for the inbox server
#[derive(Debug, Clone)]
pub struct InboxConfig {
    /// Port the listener binds on (all interfaces)
    pub port: u16,
    /// How long to wait after startup before launching the preview
    pub preview_delay: Duration,
    /// Whether to launch `gp preview` at all
    pub preview: bool,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            port: 36625,
            preview_delay: Duration::from_secs(5),
            preview: true,
        }
    }
}

/// JSON inbox server
pub struct InboxServer;

impl InboxServer {
    /// Bind the listener, spawn the preview launcher, and serve until
    /// interrupted.
    ///
    /// A bind failure propagates out so the process exits non-zero; once
    /// serving, per-request failures are contained by the handlers and
    /// never reach this level.
    pub async fn start(config: InboxConfig) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await?;

        if config.preview {
            // Captures only the values it needs; nothing is shared with
            // the accept loop.
            tokio::spawn(preview::launch_after_delay(
                config.port,
                config.preview_delay,
            ));
        }

        let app = router(Arc::new(config));

        info!("Inbox server listening on http://{}", addr);

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }
}

/// Build the router.
///
/// GET and POST share one method router mounted on both the root and a
/// wildcard path, so the handlers apply to any path the client picks.
pub fn router(config: Arc<InboxConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = get(handlers::page::info).post(handlers::inbox::receive);

    Router::new()
        .route("/", routes.clone())
        .route("/{*path}", routes)
        .layer(middleware::from_fn(access_log))
        .layer(cors)
        .with_state(config)
}

/// One operational log line per request, GET or POST alike.
async fn access_log(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    let response = next.run(request).await;

    info!(
        "{} - \"{} {} {:?}\" {}",
        addr,
        method,
        uri,
        version,
        response.status().as_u16()
    );
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
