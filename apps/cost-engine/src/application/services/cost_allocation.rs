//! Cost Allocation Engine
//!
//! The stateless per-request pipeline: pull one day's production and the
//! month's cost totals through the ports, allocate costs per egg, and
//! optionally persist the result as a daily snapshot.

use std::sync::Arc;

use crate::application::ports::{
    OperatingCostStore, PayrollStore, ProductionLogStore, SnapshotStore,
};
use crate::application::services::{
    FeedPricingStrategy, MonthlyAggregator, ProductionAggregator,
};
use crate::domain::costing::{
    AllocationInputs, CostingError, DailyCostReport, allocate, average_daily_production,
};
use crate::domain::shared::LogDate;

/// Composes the aggregators and the pricing strategy into per-egg cost
/// breakdowns.
///
/// The snapshot store is an optional dependency: `None` means snapshot
/// persistence is not configured, and `calculate_and_store` degrades to a
/// plain computation.
pub struct CostAllocationEngine<L, F, P, O, S>
where
    L: ProductionLogStore,
    F: FeedPricingStrategy,
    P: PayrollStore,
    O: OperatingCostStore,
    S: SnapshotStore,
{
    production: ProductionAggregator<L>,
    monthly: MonthlyAggregator<L, P, O>,
    feed_pricing: Arc<F>,
    snapshots: Option<Arc<S>>,
}

impl<L, F, P, O, S> CostAllocationEngine<L, F, P, O, S>
where
    L: ProductionLogStore,
    F: FeedPricingStrategy,
    P: PayrollStore,
    O: OperatingCostStore,
    S: SnapshotStore,
{
    /// Wire an engine from its stores and pricing strategy.
    pub fn new(
        logs: Arc<L>,
        feed_pricing: Arc<F>,
        payroll: Arc<P>,
        operating: Arc<O>,
        snapshots: Option<Arc<S>>,
    ) -> Self {
        Self {
            production: ProductionAggregator::new(Arc::clone(&logs)),
            monthly: MonthlyAggregator::new(logs, payroll, operating),
            feed_pricing,
            snapshots,
        }
    }

    /// Full cost breakdown for one date.
    ///
    /// A date with no logged production returns an all-zero report rather
    /// than an error: no production, no valid unit economics.
    pub async fn daily_breakdown(
        &self,
        date: LogDate,
    ) -> Result<DailyCostReport, CostingError> {
        self.compute(date).await
    }

    /// Price estimate for one date.
    ///
    /// Runs the same pipeline as [`Self::daily_breakdown`]; the DTO layer
    /// projects the price-focused view from the shared report.
    pub async fn price_estimate(
        &self,
        date: LogDate,
    ) -> Result<DailyCostReport, CostingError> {
        self.compute(date).await
    }

    /// Compute the breakdown and upsert it as the date's snapshot.
    ///
    /// The write is best-effort: an upsert failure is logged and
    /// swallowed, and the computed breakdown is still returned.
    pub async fn calculate_and_store(
        &self,
        date: LogDate,
    ) -> Result<DailyCostReport, CostingError> {
        let report = self.compute(date).await?;
        if let Some(snapshots) = &self.snapshots {
            if let Err(err) = snapshots.upsert(&report.snapshot()).await {
                tracing::warn!(
                    date = %date,
                    error = %err,
                    "failed to persist daily cost snapshot",
                );
            }
        }
        Ok(report)
    }

    async fn compute(&self, date: LogDate) -> Result<DailyCostReport, CostingError> {
        let production = self.production.daily_production(date).await?;
        if production.total_eggs == 0 {
            tracing::debug!(date = %date, "no production logged, returning zero breakdown");
            return Ok(DailyCostReport::empty(date));
        }

        let unit_cost = self.feed_pricing.current_unit_cost().await?;
        let feed_cost = unit_cost * production.total_feed_kg;

        let month = date.month_key();
        let monthly_production = self.monthly.monthly_production(month).await?;
        let monthly_labor = self.monthly.monthly_labor_cost(month).await?;
        let monthly_operating = self.monthly.monthly_operating_cost(month).await?;

        let breakdown = allocate(&AllocationInputs {
            total_eggs: production.total_eggs,
            feed_cost,
            monthly_eggs: monthly_production,
            days_in_month: month.days_in_month(),
            monthly_labor,
            monthly_operating,
        });

        Ok(DailyCostReport {
            date,
            production,
            feed_cost,
            monthly_production,
            avg_daily_production: average_daily_production(
                monthly_production,
                month.days_in_month(),
            ),
            breakdown,
        })
    }
}
