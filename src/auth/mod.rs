//! # Auth Module
//!
//! Shared-secret API key check. No sessions, no expiry.
//!
//! The key travels as a plain query parameter and so shows up in access
//! logs and URLs; deploy behind a trusted transport boundary.

pub mod crypto;
pub mod errors;
pub mod gate;

pub use errors::{AuthError, AuthResult};
pub use gate::ApiKeyGate;
