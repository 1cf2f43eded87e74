//! # HTTP Server Module
//!
//! Axum transport for the order-status API.
//!
//! # Endpoints
//!
//! - `/` - Discovery document
//! - `/rest/zoomllv` - Order status, deployed dialect
//! - `/rest/v1/zoomllv`, `/rest/v2/zoomllv` - Order status, pinned dialect
//! - `/orders` - Full listing
//! - `/health` - Liveness

pub mod config;
pub mod observability_routes;
pub mod order_routes;
pub mod server;
pub mod state;

pub use config::{HttpServerConfig, ServiceConfig};
pub use server::HttpServer;
pub use state::AppState;
