//! # Order Record
//!
//! The stored representation of one order. A record carries the fields of
//! both response dialects; each dialect renders its own view of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One order as held by the store
///
/// Records are immutable once loaded. The storage format uses the same
/// lowercase keys the legacy widget schema expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order number (lookup key)
    #[serde(rename = "ordernumber")]
    pub order_number: String,

    /// Opaque identifier assigned by the shop backend
    #[serde(default)]
    pub id: String,

    /// Status label ("Processing", "Shipped", ...)
    pub status: String,

    /// Customer display name
    pub customer: String,

    /// Line items in order
    #[serde(default)]
    pub items: Vec<String>,

    /// Order total in the configured currency unit
    pub total: u64,

    #[serde(rename = "orderdate")]
    pub order_date: NaiveDate,

    #[serde(
        rename = "estimateddelivery",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_delivery: Option<NaiveDate>,

    #[serde(
        rename = "trackingnumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_number: Option<String>,

    #[serde(
        rename = "deliverydate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_date: Option<NaiveDate>,

    /// Free-text narrative shown to the agent
    #[serde(default)]
    pub notes: String,
}

impl OrderRecord {
    /// Create a record with the required fields; optionals start empty
    pub fn new(
        order_number: impl Into<String>,
        status: impl Into<String>,
        customer: impl Into<String>,
        total: u64,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            id: String::new(),
            status: status.into(),
            customer: customer.into(),
            items: Vec::new(),
            total,
            order_date,
            estimated_delivery: None,
            tracking_number: None,
            delivery_date: None,
            notes: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_estimated_delivery(mut self, date: NaiveDate) -> Self {
        self.estimated_delivery = Some(date);
        self
    }

    pub fn with_tracking_number(mut self, tracking: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking.into());
        self
    }

    pub fn with_delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
