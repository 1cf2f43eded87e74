//! Built-in sample dataset used when no data file is configured.

use chrono::NaiveDate;

use super::errors::StoreResult;
use super::memory::InMemoryOrderStore;
use super::record::OrderRecord;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal dates below are all valid calendar days
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The three sample orders
pub fn seed_records() -> Vec<OrderRecord> {
    vec![
        OrderRecord::new("ORD001", "Processing", "田中太郎", 15000, date(2025, 1, 15))
            .with_id("1001")
            .with_items(["商品A", "商品B"])
            .with_estimated_delivery(date(2025, 1, 25))
            .with_notes("Payment confirmed, preparing for shipment"),
        OrderRecord::new("ORD002", "Shipped", "佐藤花子", 8500, date(2025, 1, 10))
            .with_id("1002")
            .with_items(["商品C"])
            .with_estimated_delivery(date(2025, 1, 20))
            .with_tracking_number("TRK123456789")
            .with_notes("Handed to carrier"),
        OrderRecord::new("ORD003", "Delivered", "鈴木一郎", 22000, date(2025, 1, 5))
            .with_id("1003")
            .with_items(["商品D", "商品E", "商品F"])
            .with_delivery_date(date(2025, 1, 18))
            .with_notes("Delivered to front desk"),
    ]
}

/// Store populated with [`seed_records`]
pub fn seeded_store() -> StoreResult<InMemoryOrderStore> {
    InMemoryOrderStore::from_records(seed_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::OrderStore;

    #[test]
    fn test_seed_is_consistent() {
        let store = seeded_store().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("ORD002").unwrap().status, "Shipped");
        assert!(store.get("ORD003").unwrap().delivery_date.is_some());
    }
}
