//! # HTTP Server
//!
//! Combines the order and health routers behind CORS, request tracing and
//! panic recovery, and serves them.

use std::any::Any;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as CorsAny, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::rest_api::{Dialect, LookupError, ShapedResponse};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::order_routes::order_routes;
use super::state::AppState;

/// HTTP server for the order-status API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(origin) => Some(origin),
                    Err(e) => {
                        tracing::warn!(event = "CORS_ORIGIN_INVALID", origin = %s, error = %e);
                        None
                    }
                })
                .collect();
            if origins.is_empty() {
                tracing::warn!(
                    event = "CORS_ORIGINS_EMPTY",
                    "no valid CORS origin configured; cross-origin requests will be refused"
                );
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(CorsAny)
                .allow_headers(CorsAny)
        };

        let mut router = Router::new()
            .merge(order_routes(state.clone()))
            .merge(health_routes(state));

        if let Some(dir) = &config.static_dir {
            router = router.fallback_service(ServeDir::new(dir));
        }

        router
            .layer(CatchPanicLayer::custom(|err: Box<dyn Any + Send + 'static>| {
                panic_response(Dialect::Legacy, err)
            }))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(event = "SERVER_LISTENING", %addr);
        tracing::info!("Health check: http://{}/health", addr);
        tracing::info!("API endpoint: http://{}/rest/zoomllv", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(event = "SERVER_STOPPED");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(event = "SIGNAL_HANDLER_FAILED", error = %e);
        std::future::pending::<()>().await;
    }
}

/// Turn a handler panic into a 500 `INTERNAL_ERROR` body in `dialect`'s shape.
///
/// Lookup routes install this with their own dialect; the router-wide layer
/// falls back to the legacy object for everything else.
pub(crate) fn panic_response(dialect: Dialect, err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(event = "HANDLER_PANIC", dialect = %dialect, error = %detail);

    ShapedResponse::failure(dialect, &LookupError::Internal(detail)).into_response()
}
