//! Get Range Summary Use Case

use std::sync::Arc;

use crate::application::dto::RangeSummaryDto;
use crate::application::ports::ProductionLogStore;
use crate::application::services::ProductionAggregator;
use crate::domain::costing::CostingError;
use crate::domain::shared::LogDate;

/// Use case for the production summary over a date range.
pub struct GetRangeSummaryUseCase<L>
where
    L: ProductionLogStore,
{
    production: ProductionAggregator<L>,
}

impl<L> GetRangeSummaryUseCase<L>
where
    L: ProductionLogStore,
{
    /// Create a new use case over a log store.
    pub fn new(logs: Arc<L>) -> Self {
        Self {
            production: ProductionAggregator::new(logs),
        }
    }

    /// Execute the use case for inclusive `YYYY-MM-DD` range bounds.
    ///
    /// # Errors
    ///
    /// Returns `CostingError::InvalidInput` for a malformed or inverted
    /// range, or a store error if the read fails.
    pub async fn execute(
        &self,
        start: &str,
        end: &str,
    ) -> Result<RangeSummaryDto, CostingError> {
        let start = LogDate::parse(start)?;
        let end = LogDate::parse(end)?;
        let totals = self.production.range_production(start, end).await?;
        Ok(RangeSummaryDto::new(start, end, totals))
    }
}
