//! # API Key Gate
//!
//! Stateless check of a presented key against one process-wide secret.

use super::crypto::constant_time_str_eq;
use super::errors::{AuthError, AuthResult};

/// Validates the `apikey` query parameter
#[derive(Clone, Default)]
pub struct ApiKeyGate {
    secret: Option<String>,
}

impl ApiKeyGate {
    /// Gate accepting exactly `secret`. An empty secret accepts nothing.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            secret: (!secret.is_empty()).then_some(secret),
        }
    }

    /// Gate with no configured secret; every request is rejected
    pub fn deny_all() -> Self {
        Self { secret: None }
    }

    /// Whether a secret is configured
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Valid iff the key is non-empty and equals the secret exactly
    pub fn authenticate(&self, presented: Option<&str>) -> AuthResult<()> {
        let presented = presented
            .filter(|k| !k.is_empty())
            .ok_or(AuthError::MissingApiKey)?;

        match &self.secret {
            Some(secret) if constant_time_str_eq(presented, secret) => Ok(()),
            _ => Err(AuthError::InvalidApiKey),
        }
    }
}

// Never print the secret
impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}
