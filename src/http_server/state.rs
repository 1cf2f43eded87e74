//! Shared state for the HTTP routes.

use std::time::{Duration, Instant};

use crate::auth::ApiKeyGate;
use crate::rest_api::{Dialect, OrderLookupHandler};
use crate::store::StoreResult;

use super::config::ServiceConfig;

/// Read-only state shared by every request
#[derive(Debug)]
pub struct AppState {
    pub handler: OrderLookupHandler,
    /// Dialect served at the unversioned endpoint
    pub dialect: Dialect,
    started_at: Instant,
}

impl AppState {
    pub fn new(handler: OrderLookupHandler, dialect: Dialect) -> Self {
        Self {
            handler,
            dialect,
            started_at: Instant::now(),
        }
    }

    /// Build state from config: load the dataset and set up the key gate
    pub fn from_config(config: &ServiceConfig) -> StoreResult<Self> {
        let store = config.load_store()?;
        let gate = match &config.api_key {
            Some(key) => ApiKeyGate::new(key.clone()),
            None => ApiKeyGate::deny_all(),
        };
        Ok(Self::new(OrderLookupHandler::new(store, gate), config.dialect))
    }

    /// Time since the state was created (monotonic)
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
