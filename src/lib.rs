//! orderlink - Order-status lookups for contact-center widgets
//!
//! A caller sends an opaque query token plus an API key; the service checks
//! the key, pulls the order number out of the token, looks it up and answers
//! in the calling widget's schema.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod store;
