//! # Order Lookup Handler
//!
//! Runs one order-status request through
//! `AUTHENTICATING -> EXTRACTING -> LOOKING_UP -> SHAPING`. Any stage may end
//! the request early with a classified failure; every path yields exactly
//! one shaped response. Nothing is retried and no state survives the call.

use std::sync::Arc;

use crate::auth::ApiKeyGate;
use crate::store::{OrderRecord, OrderStore};

use super::dialect::Dialect;
use super::errors::{LookupError, LookupResult};
use super::response::ShapedResponse;

/// Composes auth gate, query extractor, store and shaper
#[derive(Debug, Clone)]
pub struct OrderLookupHandler {
    store: Arc<dyn OrderStore>,
    gate: ApiKeyGate,
}

impl OrderLookupHandler {
    pub fn new(store: Arc<dyn OrderStore>, gate: ApiKeyGate) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &dyn OrderStore {
        self.store.as_ref()
    }

    /// Resolve a request to a stored record.
    ///
    /// The key is checked before the query is looked at, so a rejected
    /// caller learns nothing about the token or the dataset.
    pub fn lookup(
        &self,
        dialect: Dialect,
        query: Option<&str>,
        api_key: Option<&str>,
    ) -> LookupResult<&OrderRecord> {
        self.gate.authenticate(api_key)?;

        let order_number = dialect.grammar().extract(query)?;

        self.store
            .get(&order_number)
            .ok_or(LookupError::OrderNotFound(order_number))
    }

    /// Run the full request and shape the outcome for `dialect`
    pub fn handle(
        &self,
        dialect: Dialect,
        query: Option<&str>,
        api_key: Option<&str>,
    ) -> ShapedResponse {
        let outcome = self
            .lookup(dialect, query, api_key)
            .and_then(|record| ShapedResponse::found(dialect, record).map(|r| (record, r)));

        match outcome {
            Ok((record, shaped)) => {
                tracing::info!(
                    event = "ORDER_LOOKUP_OK",
                    dialect = %dialect,
                    ordernumber = %record.order_number,
                );
                shaped
            }
            Err(err) => {
                match &err {
                    LookupError::Internal(detail) => tracing::error!(
                        event = "ORDER_LOOKUP_FAILED",
                        dialect = %dialect,
                        stage = err.stage().as_str(),
                        error = %detail,
                    ),
                    _ => tracing::info!(
                        event = "ORDER_LOOKUP_REJECTED",
                        dialect = %dialect,
                        stage = err.stage().as_str(),
                        code = err.code(),
                    ),
                }
                ShapedResponse::failure(dialect, &err)
            }
        }
    }
}
