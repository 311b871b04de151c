//! Production Log Store Port (Driven Port)

use async_trait::async_trait;

use super::StoreError;
use crate::domain::records::ProductionLog;
use crate::domain::shared::LogDate;

/// Port for reading production log rows.
#[async_trait]
pub trait ProductionLogStore: Send + Sync {
    /// All log rows for one date, across houses.
    async fn find_by_date(&self, date: LogDate) -> Result<Vec<ProductionLog>, StoreError>;

    /// All log rows in an inclusive date range.
    async fn find_in_range(
        &self,
        start: LogDate,
        end: LogDate,
    ) -> Result<Vec<ProductionLog>, StoreError>;
}
