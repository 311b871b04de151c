//! Snapshot Store Port (Driven Port)
//!
//! The one store the engine writes: persisted daily cost snapshots, keyed
//! by date. Writes are best-effort; the engine logs and swallows failures.

use std::collections::HashMap;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::records::DailyCostSnapshot;
use crate::domain::shared::LogDate;

/// Port for persisting computed daily cost snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Insert or replace the snapshot for its date.
    async fn upsert(&self, snapshot: &DailyCostSnapshot) -> Result<(), StoreError>;

    /// The stored snapshot for one date, if present.
    async fn find_by_date(&self, date: LogDate)
    -> Result<Option<DailyCostSnapshot>, StoreError>;
}

/// In-memory implementation for testing and development.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: std::sync::RwLock<HashMap<LogDate, DailyCostSnapshot>>,
}

impl InMemorySnapshotStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn upsert(&self, snapshot: &DailyCostSnapshot) -> Result<(), StoreError> {
        let mut snapshots = self
            .snapshots
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        snapshots.insert(snapshot.date, snapshot.clone());
        drop(snapshots);
        Ok(())
    }

    async fn find_by_date(
        &self,
        date: LogDate,
    ) -> Result<Option<DailyCostSnapshot>, StoreError> {
        let snapshots = self
            .snapshots
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(snapshots.get(&date).cloned())
    }
}
