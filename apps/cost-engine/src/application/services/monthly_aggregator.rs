//! Monthly aggregation of production and cost records.

use std::sync::Arc;

use crate::application::ports::{OperatingCostStore, PayrollStore, ProductionLogStore};
use crate::domain::costing::CostingError;
use crate::domain::shared::{Money, MonthKey};

/// Sums a month's production, labor, and operating costs.
///
/// Missing records are not errors: a month with no payroll rows or no
/// operating-cost record sums to zero.
pub struct MonthlyAggregator<L, P, O>
where
    L: ProductionLogStore,
    P: PayrollStore,
    O: OperatingCostStore,
{
    logs: Arc<L>,
    payroll: Arc<P>,
    operating: Arc<O>,
}

impl<L, P, O> MonthlyAggregator<L, P, O>
where
    L: ProductionLogStore,
    P: PayrollStore,
    O: OperatingCostStore,
{
    /// Create a new aggregator over the month-bucketed stores.
    pub fn new(logs: Arc<L>, payroll: Arc<P>, operating: Arc<O>) -> Self {
        Self {
            logs,
            payroll,
            operating,
        }
    }

    /// Total eggs logged in one calendar month.
    pub async fn monthly_production(&self, month: MonthKey) -> Result<u64, CostingError> {
        let rows = self
            .logs
            .find_in_range(month.first_day(), month.last_day())
            .await?;
        Ok(rows.iter().map(|row| row.eggs.total()).sum())
    }

    /// Total net pay across all laborers for one month.
    pub async fn monthly_labor_cost(&self, month: MonthKey) -> Result<Money, CostingError> {
        let records = self.payroll.find_by_month(month).await?;
        Ok(records
            .iter()
            .fold(Money::ZERO, |acc, record| acc + record.net_pay))
    }

    /// Total fixed overhead for one month.
    pub async fn monthly_operating_cost(
        &self,
        month: MonthKey,
    ) -> Result<Money, CostingError> {
        let record = self.operating.find_by_month(month).await?;
        Ok(record.map_or(Money::ZERO, |r| r.total()))
    }

    /// Working days (Sundays excluded) in one month.
    ///
    /// Reported alongside the monthly figures; the cost formulas prorate
    /// over calendar days.
    #[must_use]
    pub fn working_days(&self, month: MonthKey) -> u32 {
        month.working_days()
    }
}
