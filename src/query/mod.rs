//! # Query Extraction
//!
//! Turns the widget's raw `q` token into an order number. Each endpoint
//! version fixes one grammar; the token's content is never sniffed to
//! choose between them.

mod embedded;
mod errors;
mod structured;

use serde::{Deserialize, Serialize};

pub use embedded::extract_embedded;
pub use errors::{ExtractError, ExtractResult};
pub use structured::{extract_structured, ORDER_NUMBER_FIELD};

/// Query token grammar accepted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryGrammar {
    /// `ordernumber":"ORD001"` inside arbitrary template text
    Embedded,
    /// URL-escaped JSON object with an `ordernumber` field
    Structured,
}

impl QueryGrammar {
    /// Extract the order number from a possibly absent token.
    ///
    /// Never panics on malformed input; every failure is classified.
    pub fn extract(self, raw: Option<&str>) -> ExtractResult<String> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ExtractError::MissingQuery)?;

        match self {
            QueryGrammar::Embedded => extract_embedded(raw),
            QueryGrammar::Structured => extract_structured(raw),
        }
    }
}
