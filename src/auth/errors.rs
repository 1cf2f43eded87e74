//! # Auth Errors
//!
//! Error types for the API key gate.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// API key rejections. Both map to 401 and share one wire code, so the
/// caller cannot tell a missing key from a wrong one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `apikey` parameter, or an empty one
    #[error("Invalid API key")]
    MissingApiKey,

    /// Key presented but does not match (or no secret is configured)
    #[error("Invalid API key")]
    InvalidApiKey,
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        401
    }

    /// Wire code reported to the caller
    pub fn code(&self) -> &'static str {
        "UNAUTHORIZED"
    }
}
