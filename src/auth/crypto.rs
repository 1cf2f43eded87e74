//! # Secret Comparison
//!
//! Constant-time comparison for shared secrets.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time
///
/// Length mismatch returns early; only the contents are protected.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
