//! Operating Cost Store Port (Driven Port)

use async_trait::async_trait;

use super::StoreError;
use crate::domain::records::OperatingCost;
use crate::domain::shared::MonthKey;

/// Port for monthly operating-cost records.
#[async_trait]
pub trait OperatingCostStore: Send + Sync {
    /// The operating-cost record for one month, if present.
    async fn find_by_month(&self, month: MonthKey) -> Result<Option<OperatingCost>, StoreError>;

    /// Save a monthly record. Duplicate-month rejection happens in the
    /// use case; a save for an existing month overwrites.
    async fn save(&self, record: &OperatingCost) -> Result<(), StoreError>;
}
