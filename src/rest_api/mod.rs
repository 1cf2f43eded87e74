//! # Order Status API
//!
//! Request-parsing and response-shaping core of the order-status endpoint,
//! independent of the HTTP transport.

pub mod dialect;
pub mod errors;
pub mod handler;
pub mod response;

pub use dialect::Dialect;
pub use errors::{LookupError, LookupResult, LookupStage};
pub use handler::OrderLookupHandler;
pub use response::{iso_timestamp, OrderListResponse, OrderView, ShapedResponse};
