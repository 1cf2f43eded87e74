//! # Lookup Errors
//!
//! Classified failures of the order-status request, each with a fixed
//! HTTP status and wire code.

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::AuthError;
use crate::query::ExtractError;

/// Result type for order lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Request processing stage a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Authenticating,
    Extracting,
    LookingUp,
    Shaping,
}

impl LookupStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStage::Authenticating => "AUTHENTICATING",
            LookupStage::Extracting => "EXTRACTING",
            LookupStage::LookingUp => "LOOKING_UP",
            LookupStage::Shaping => "SHAPING",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum LookupError {
    // ==================
    // Client Errors (4xx)
    // ==================
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Unknown order number (legacy dialect only reports this as an error)
    #[error("Order not found")]
    OrderNotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal server error")]
    Internal(String),
}

impl LookupError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::Auth(auth_err) => {
                StatusCode::from_u16(auth_err.status_code()).unwrap_or(StatusCode::UNAUTHORIZED)
            }
            LookupError::Extract(_) => StatusCode::BAD_REQUEST,
            LookupError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            LookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire code reported to the caller
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::Auth(e) => e.code(),
            LookupError::Extract(e) => e.code(),
            LookupError::OrderNotFound(_) => "ORDER_NOT_FOUND",
            LookupError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn stage(&self) -> LookupStage {
        match self {
            LookupError::Auth(_) => LookupStage::Authenticating,
            LookupError::Extract(_) => LookupStage::Extracting,
            LookupError::OrderNotFound(_) => LookupStage::LookingUp,
            LookupError::Internal(_) => LookupStage::Shaping,
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Internal(e.to_string())
    }
}
