//! Production aggregation over log rows.

use std::sync::Arc;

use crate::application::ports::ProductionLogStore;
use crate::domain::costing::{CostingError, ProductionTotals};
use crate::domain::records::ProductionLog;
use crate::domain::shared::LogDate;

/// Sums egg counts and feed consumption from the log store.
pub struct ProductionAggregator<L>
where
    L: ProductionLogStore,
{
    logs: Arc<L>,
}

impl<L> ProductionAggregator<L>
where
    L: ProductionLogStore,
{
    /// Create a new aggregator over a log store.
    pub fn new(logs: Arc<L>) -> Self {
        Self { logs }
    }

    /// Production totals for one date, across all houses.
    ///
    /// A date with no logged rows yields all-zero totals, not an error.
    pub async fn daily_production(
        &self,
        date: LogDate,
    ) -> Result<ProductionTotals, CostingError> {
        let rows = self.logs.find_by_date(date).await?;
        Ok(sum_rows(&rows))
    }

    /// Production totals over an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns `CostingError::InvalidInput` when `start` is after `end`.
    pub async fn range_production(
        &self,
        start: LogDate,
        end: LogDate,
    ) -> Result<ProductionTotals, CostingError> {
        if start > end {
            return Err(CostingError::InvalidInput {
                field: "range".to_string(),
                message: format!("start {start} is after end {end}"),
            });
        }
        let rows = self.logs.find_in_range(start, end).await?;
        Ok(sum_rows(&rows))
    }
}

fn sum_rows(rows: &[ProductionLog]) -> ProductionTotals {
    rows.iter().fold(ProductionTotals::default(), |acc, row| {
        ProductionTotals {
            total_eggs: acc.total_eggs + row.eggs.total(),
            total_feed_kg: acc.total_feed_kg + row.feed_kg,
        }
    })
}
