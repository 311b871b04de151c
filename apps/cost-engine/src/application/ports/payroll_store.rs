//! Payroll Store Port (Driven Port)

use async_trait::async_trait;

use super::StoreError;
use crate::domain::records::PayrollRecord;
use crate::domain::shared::MonthKey;

/// Port for reading payroll records.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// All payroll records for one month.
    async fn find_by_month(&self, month: MonthKey) -> Result<Vec<PayrollRecord>, StoreError>;
}
