//! # Order Store Trait

use super::record::OrderRecord;

/// Read-only access to the order dataset
///
/// Implementations are populated once at startup and shared across
/// concurrent requests without locking.
pub trait OrderStore: Send + Sync + std::fmt::Debug {
    /// Look up one order by its number. Unknown numbers yield `None`.
    fn get(&self, order_number: &str) -> Option<&OrderRecord>;

    /// All orders in insertion order
    fn list_all(&self) -> Vec<&OrderRecord>;

    /// Number of stored orders
    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
