//! # Response Shaping
//!
//! Renders lookup outcomes in the active dialect's external shape:
//!
//! | Outcome   | Legacy                                   | Current              |
//! |-----------|------------------------------------------|----------------------|
//! | found     | 200 `{success, data, timestamp}`         | 200 `[record]`       |
//! | not found | 404 `{error, code, ordernumber}`         | 200 `[]`             |
//! | failure   | status `{error, code}`                   | status `[{error, code}]` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::store::OrderRecord;

use super::dialect::Dialect;
use super::errors::{LookupError, LookupResult};

/// Current instant as RFC 3339 UTC with millisecond precision
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ==================
// Record Views
// ==================

/// Legacy widget schema of a record
#[derive(Debug, Clone, Serialize)]
pub struct LegacyOrderView<'a> {
    pub ordernumber: &'a str,
    pub status: &'a str,
    pub customer: &'a str,
    pub items: &'a [String],
    pub total: u64,
    pub orderdate: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimateddelivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trackingnumber: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverydate: Option<NaiveDate>,
}

/// Current widget schema of a record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentOrderView<'a> {
    #[serde(rename = "ordernumber")]
    pub order_number: &'a str,
    pub id: &'a str,
    pub order_name: &'a str,
    pub order_status: &'a str,
    pub order_notes: &'a str,
    pub order_tracking_id: &'a str,
}

/// A record rendered for one dialect
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OrderView<'a> {
    Legacy(LegacyOrderView<'a>),
    Current(CurrentOrderView<'a>),
}

impl<'a> OrderView<'a> {
    pub fn new(dialect: Dialect, record: &'a OrderRecord) -> Self {
        match dialect {
            Dialect::Legacy => OrderView::Legacy(LegacyOrderView {
                ordernumber: &record.order_number,
                status: &record.status,
                customer: &record.customer,
                items: &record.items,
                total: record.total,
                orderdate: record.order_date,
                estimateddelivery: record.estimated_delivery,
                trackingnumber: record.tracking_number.as_deref(),
                deliverydate: record.delivery_date,
            }),
            Dialect::Current => OrderView::Current(CurrentOrderView {
                order_number: &record.order_number,
                id: &record.id,
                order_name: &record.customer,
                order_status: &record.status,
                order_notes: &record.notes,
                order_tracking_id: record.tracking_number.as_deref().unwrap_or_default(),
            }),
        }
    }
}

// ==================
// Bodies
// ==================

/// Legacy success body
#[derive(Debug, Serialize)]
pub struct FoundResponse<'a> {
    pub success: bool,
    pub data: OrderView<'a>,
    pub timestamp: String,
}

/// Error body (legacy: bare object, current: wrapped in a one-element array)
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordernumber: Option<String>,
}

impl From<&LookupError> for ErrorResponse {
    fn from(err: &LookupError) -> Self {
        let ordernumber = match err {
            LookupError::OrderNotFound(n) => Some(n.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code: err.code(),
            ordernumber,
        }
    }
}

/// Listing body for `/orders`
#[derive(Debug, Serialize)]
pub struct OrderListResponse<'a> {
    pub success: bool,
    pub orders: Vec<OrderView<'a>>,
    pub count: usize,
}

impl<'a> OrderListResponse<'a> {
    pub fn new(dialect: Dialect, records: Vec<&'a OrderRecord>) -> Self {
        let orders: Vec<_> = records
            .into_iter()
            .map(|r| OrderView::new(dialect, r))
            .collect();
        let count = orders.len();
        Self {
            success: true,
            orders,
            count,
        }
    }
}

// ==================
// Shaped Response
// ==================

/// Final status and JSON body of an order-status request
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ShapedResponse {
    /// Record found
    pub fn found(dialect: Dialect, record: &OrderRecord) -> LookupResult<Self> {
        let view = OrderView::new(dialect, record);
        let body = match dialect {
            Dialect::Legacy => serde_json::to_value(FoundResponse {
                success: true,
                data: view,
                timestamp: iso_timestamp(),
            })?,
            Dialect::Current => serde_json::to_value([view])?,
        };
        Ok(Self {
            status: StatusCode::OK,
            body,
        })
    }

    /// Any classified failure, including an unknown order number
    pub fn failure(dialect: Dialect, err: &LookupError) -> Self {
        if let (Dialect::Current, LookupError::OrderNotFound(_)) = (dialect, err) {
            return Self {
                status: StatusCode::OK,
                body: Value::Array(Vec::new()),
            };
        }

        let error = ErrorResponse::from(err);
        let body = match dialect {
            Dialect::Legacy => serde_json::json!(error),
            Dialect::Current => serde_json::json!([error]),
        };
        Self {
            status: err.status_code(),
            body,
        }
    }
}

impl IntoResponse for ShapedResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
