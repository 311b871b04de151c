//! In-memory store implementations.
//!
//! Suitable for testing, development, and fixture-fed reports. Not for
//! production use.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{
    FeedBatchStore, OperatingCostStore, PayrollStore, ProductionLogStore, StoreError,
};
use crate::domain::records::{FeedBatch, OperatingCost, PayrollRecord, ProductionLog};
use crate::domain::shared::{LogDate, MonthKey};

/// In-memory implementation of `ProductionLogStore`.
#[derive(Debug, Default)]
pub struct InMemoryProductionLogStore {
    logs: RwLock<Vec<ProductionLog>>,
}

impl InMemoryProductionLogStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log row (for test and fixture setup).
    pub fn add(&self, log: ProductionLog) {
        let mut logs = self.logs.write().unwrap();
        logs.push(log);
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.read().unwrap().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.read().unwrap().is_empty()
    }
}

#[async_trait]
impl ProductionLogStore for InMemoryProductionLogStore {
    async fn find_by_date(&self, date: LogDate) -> Result<Vec<ProductionLog>, StoreError> {
        let logs = self.logs.read().unwrap();
        Ok(logs.iter().filter(|log| log.date == date).cloned().collect())
    }

    async fn find_in_range(
        &self,
        start: LogDate,
        end: LogDate,
    ) -> Result<Vec<ProductionLog>, StoreError> {
        let logs = self.logs.read().unwrap();
        Ok(logs
            .iter()
            .filter(|log| log.date >= start && log.date <= end)
            .cloned()
            .collect())
    }
}

/// In-memory implementation of `FeedBatchStore`.
#[derive(Debug, Default)]
pub struct InMemoryFeedBatchStore {
    batches: RwLock<Vec<FeedBatch>>,
}

impl InMemoryFeedBatchStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch (for test and fixture setup).
    pub fn add(&self, batch: FeedBatch) {
        let mut batches = self.batches.write().unwrap();
        batches.push(batch);
    }
}

#[async_trait]
impl FeedBatchStore for InMemoryFeedBatchStore {
    async fn find_latest(&self) -> Result<Option<FeedBatch>, StoreError> {
        let batches = self.batches.read().unwrap();
        Ok(batches
            .iter()
            .max_by_key(|batch| batch.batch_date)
            .cloned())
    }
}

/// In-memory implementation of `PayrollStore`.
#[derive(Debug, Default)]
pub struct InMemoryPayrollStore {
    records: RwLock<Vec<PayrollRecord>>,
}

impl InMemoryPayrollStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a payroll record (for test and fixture setup).
    pub fn add(&self, record: PayrollRecord) {
        let mut records = self.records.write().unwrap();
        records.push(record);
    }
}

#[async_trait]
impl PayrollStore for InMemoryPayrollStore {
    async fn find_by_month(
        &self,
        month: MonthKey,
    ) -> Result<Vec<PayrollRecord>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .filter(|record| record.month == month)
            .cloned()
            .collect())
    }
}

/// In-memory implementation of `OperatingCostStore`.
#[derive(Debug, Default)]
pub struct InMemoryOperatingCostStore {
    records: RwLock<HashMap<MonthKey, OperatingCost>>,
}

impl InMemoryOperatingCostStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record directly, bypassing duplicate checks (for test and
    /// fixture setup).
    pub fn add(&self, record: OperatingCost) {
        let mut records = self.records.write().unwrap();
        records.insert(record.month, record);
    }
}

#[async_trait]
impl OperatingCostStore for InMemoryOperatingCostStore {
    async fn find_by_month(
        &self,
        month: MonthKey,
    ) -> Result<Option<OperatingCost>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.get(&month).cloned())
    }

    async fn save(&self, record: &OperatingCost) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        records.insert(record.month, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{EggCounts, Money};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn production_log_store_filters_by_date() {
        let store = InMemoryProductionLogStore::new();
        store.add(ProductionLog {
            date: LogDate::parse("2025-08-01").unwrap(),
            house_id: "house-1".to_string(),
            eggs: EggCounts::new(10, 5, 1),
            feed_kg: dec!(4),
            mortality: 0,
        });
        store.add(ProductionLog {
            date: LogDate::parse("2025-08-02").unwrap(),
            house_id: "house-1".to_string(),
            eggs: EggCounts::new(12, 4, 2),
            feed_kg: dec!(4.5),
            mortality: 0,
        });

        let rows = store
            .find_by_date(LogDate::parse("2025-08-01").unwrap())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[tokio::test]
    async fn feed_batch_store_latest_by_date() {
        let store = InMemoryFeedBatchStore::new();
        store.add(FeedBatch {
            batch_date: LogDate::parse("2025-07-28").unwrap(),
            quantity_kg: dec!(400),
            total_cost: Money::new(dec!(300)),
        });
        store.add(FeedBatch {
            batch_date: LogDate::parse("2025-06-01").unwrap(),
            quantity_kg: dec!(500),
            total_cost: Money::new(dec!(450)),
        });

        let latest = store.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.batch_date, LogDate::parse("2025-07-28").unwrap());
    }

    #[tokio::test]
    async fn feed_batch_store_empty_has_no_latest() {
        let store = InMemoryFeedBatchStore::new();
        assert!(store.find_latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn operating_cost_store_save_and_find() {
        let store = InMemoryOperatingCostStore::new();
        let record = OperatingCost {
            month: MonthKey::parse("2025-08").unwrap(),
            supervisor_salary: Money::new(dec!(1200)),
            utilities: Money::new(dec!(300)),
            maintenance: Money::new(dec!(150)),
            other: Money::new(dec!(50)),
        };

        store.save(&record).await.unwrap();

        let found = store
            .find_by_month(MonthKey::parse("2025-08").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(record));

        let missing = store
            .find_by_month(MonthKey::parse("2025-09").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
