//! # Query Extraction Errors
//!
//! Classified reasons a query token did not yield an order number.

use thiserror::Error;

/// Result type for query extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No `q` parameter, or only whitespace
    #[error("Query parameter 'q' is required")]
    MissingQuery,

    /// Embedded form: no `ordernumber` assignment found
    #[error("Order number not found in query")]
    InvalidQueryFormat,

    /// Structured form: token is not valid (URL-escaped) JSON
    #[error("Query is not valid JSON: {0}")]
    BadQueryJson(String),

    /// Structured form: JSON parsed but has no usable `ordernumber`
    #[error("Query JSON has no 'ordernumber' field")]
    MissingOrderNumber,
}

impl ExtractError {
    /// Wire code reported to the caller
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::MissingQuery => "MISSING_QUERY",
            ExtractError::InvalidQueryFormat => "INVALID_QUERY_FORMAT",
            ExtractError::BadQueryJson(_) => "BAD_QUERY_JSON",
            ExtractError::MissingOrderNumber => "MISSING_ORDER_NUMBER",
        }
    }
}
