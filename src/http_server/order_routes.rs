//! Order HTTP Routes
//!
//! The order-status endpoint in its deployed and versioned forms, the full
//! listing, and the discovery document at `/`.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use serde_json::{json, Value};

use crate::rest_api::{Dialect, OrderListResponse, ShapedResponse};

use super::server::panic_response;
use super::state::AppState;

/// Order routes with shared state
pub fn order_routes(state: Arc<AppState>) -> Router {
    let deployed = state.dialect;
    Router::new()
        .route("/", get(discovery_handler))
        .route(
            "/rest/zoomllv",
            in_dialect(get(deployed_lookup_handler), deployed),
        )
        .route(
            "/rest/v1/zoomllv",
            in_dialect(get(legacy_lookup_handler), Dialect::Legacy),
        )
        .route(
            "/rest/v2/zoomllv",
            in_dialect(get(current_lookup_handler), Dialect::Current),
        )
        .route("/orders", get(list_orders_handler))
        .with_state(state)
}

/// Answer panics on a lookup route with the route's own error shape
fn in_dialect(
    route: MethodRouter<Arc<AppState>>,
    dialect: Dialect,
) -> MethodRouter<Arc<AppState>> {
    route.layer(CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
        panic_response(dialect, err)
    }))
}

fn lookup(state: &AppState, dialect: Dialect, params: &HashMap<String, String>) -> ShapedResponse {
    state.handler.handle(
        dialect,
        params.get("q").map(String::as_str),
        params.get("apikey").map(String::as_str),
    )
}

async fn deployed_lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ShapedResponse {
    lookup(&state, state.dialect, &params)
}

async fn legacy_lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ShapedResponse {
    lookup(&state, Dialect::Legacy, &params)
}

async fn current_lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ShapedResponse {
    lookup(&state, Dialect::Current, &params)
}

async fn list_orders_handler(State(state): State<Arc<AppState>>) -> Response {
    let records = state.handler.store().list_all();
    // Serialize while the records are still borrowed from `state`
    Json(OrderListResponse::new(state.dialect, records)).into_response()
}

/// API description for humans configuring the widget
pub fn discovery_document(dialect: Dialect) -> Value {
    let legacy_query = "q={ordernumber}:{{global_custom.Zoomllv.ordernumber}}";
    let current_query = r#"q={"ordernumber":"{{global_custom.Zoomllv.ordernumber}}"}"#;
    let deployed_query = match dialect {
        Dialect::Legacy => legacy_query,
        Dialect::Current => current_query,
    };

    json!({
        "message": "Zoom Contact Center Order Status API",
        "version": env!("CARGO_PKG_VERSION"),
        "dialect": dialect,
        "endpoints": {
            "orderStatus": format!("/rest/zoomllv?{}&apikey=YOUR_API_KEY", deployed_query),
            "orderStatusV1": format!("/rest/v1/zoomllv?{}&apikey=YOUR_API_KEY", legacy_query),
            "orderStatusV2": format!("/rest/v2/zoomllv?{}&apikey=YOUR_API_KEY", current_query),
            "orders": "/orders",
            "health": "/health"
        }
    })
}

async fn discovery_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(discovery_document(state.dialect))
}
