//! Get Price Estimate Use Case

use std::sync::Arc;

use crate::application::dto::PriceEstimateDto;
use crate::application::ports::{
    OperatingCostStore, PayrollStore, ProductionLogStore, SnapshotStore,
};
use crate::application::services::{CostAllocationEngine, FeedPricingStrategy};
use crate::domain::costing::CostingError;
use crate::domain::shared::LogDate;

/// Use case for the price estimate view.
pub struct GetPriceEstimateUseCase<L, F, P, O, S>
where
    L: ProductionLogStore,
    F: FeedPricingStrategy,
    P: PayrollStore,
    O: OperatingCostStore,
    S: SnapshotStore,
{
    engine: Arc<CostAllocationEngine<L, F, P, O, S>>,
}

impl<L, F, P, O, S> GetPriceEstimateUseCase<L, F, P, O, S>
where
    L: ProductionLogStore,
    F: FeedPricingStrategy,
    P: PayrollStore,
    O: OperatingCostStore,
    S: SnapshotStore,
{
    /// Create a new use case over the engine.
    pub fn new(engine: Arc<CostAllocationEngine<L, F, P, O, S>>) -> Self {
        Self { engine }
    }

    /// Execute the use case for a `YYYY-MM-DD` date string.
    ///
    /// # Errors
    ///
    /// Returns `CostingError::InvalidInput` for a malformed date, or a
    /// store error if a read fails.
    pub async fn execute(&self, date: &str) -> Result<PriceEstimateDto, CostingError> {
        let date = LogDate::parse(date)?;
        let report = self.engine.price_estimate(date).await?;
        Ok(PriceEstimateDto::from_report(&report))
    }
}
