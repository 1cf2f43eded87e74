//! # Order Store
//!
//! Read-only order dataset, populated once at process start and injected
//! into the request handler.

mod backend;
mod errors;
mod memory;
mod record;
mod seed;

pub use backend::OrderStore;
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryOrderStore;
pub use record::OrderRecord;
pub use seed::{seed_records, seeded_store};
