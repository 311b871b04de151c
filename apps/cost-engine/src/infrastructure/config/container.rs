//! Dependency Injection Container
//!
//! Manages creation and wiring of the engine and its use cases.

use std::sync::Arc;

use crate::application::ports::{
    FeedBatchStore, OperatingCostStore, PayrollStore, ProductionLogStore, SnapshotStore,
};
use crate::application::services::{CostAllocationEngine, LatestBatchPricingStrategy};
use crate::application::use_cases::{
    GetDailyCostUseCase, GetPriceEstimateUseCase, GetRangeSummaryUseCase,
    RecordOperatingCostUseCase,
};

/// Dependency injection container.
///
/// Holds the store ports and wires them into the engine and use cases.
/// The snapshot store is optional: pass `None` to run without snapshot
/// persistence.
pub struct Container<L, F, P, O, S>
where
    L: ProductionLogStore + 'static,
    F: FeedBatchStore + 'static,
    P: PayrollStore + 'static,
    O: OperatingCostStore + 'static,
    S: SnapshotStore + 'static,
{
    logs: Arc<L>,
    batches: Arc<F>,
    payroll: Arc<P>,
    operating: Arc<O>,
    snapshots: Option<Arc<S>>,
    engine: Arc<EngineFor<L, F, P, O, S>>,
}

/// The concrete engine type the container wires.
pub type EngineFor<L, F, P, O, S> =
    CostAllocationEngine<L, LatestBatchPricingStrategy<F>, P, O, S>;

impl<L, F, P, O, S> Container<L, F, P, O, S>
where
    L: ProductionLogStore + 'static,
    F: FeedBatchStore + 'static,
    P: PayrollStore + 'static,
    O: OperatingCostStore + 'static,
    S: SnapshotStore + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(
        logs: Arc<L>,
        batches: Arc<F>,
        payroll: Arc<P>,
        operating: Arc<O>,
        snapshots: Option<Arc<S>>,
    ) -> Self {
        let engine = Arc::new(CostAllocationEngine::new(
            Arc::clone(&logs),
            Arc::new(LatestBatchPricingStrategy::new(Arc::clone(&batches))),
            Arc::clone(&payroll),
            Arc::clone(&operating),
            snapshots.clone(),
        ));
        Self {
            logs,
            batches,
            payroll,
            operating,
            snapshots,
            engine,
        }
    }

    /// Get the wired engine.
    pub fn engine(&self) -> Arc<EngineFor<L, F, P, O, S>> {
        Arc::clone(&self.engine)
    }

    /// Get the production log store.
    pub fn logs(&self) -> Arc<L> {
        Arc::clone(&self.logs)
    }

    /// Get the feed batch store.
    pub fn batches(&self) -> Arc<F> {
        Arc::clone(&self.batches)
    }

    /// Get the payroll store.
    pub fn payroll(&self) -> Arc<P> {
        Arc::clone(&self.payroll)
    }

    /// Get the operating cost store.
    pub fn operating(&self) -> Arc<O> {
        Arc::clone(&self.operating)
    }

    /// Get the snapshot store, if configured.
    pub fn snapshots(&self) -> Option<Arc<S>> {
        self.snapshots.clone()
    }

    /// Create a `GetDailyCostUseCase`.
    pub fn get_daily_cost_use_case(
        &self,
    ) -> GetDailyCostUseCase<L, LatestBatchPricingStrategy<F>, P, O, S> {
        GetDailyCostUseCase::new(self.engine())
    }

    /// Create a `GetPriceEstimateUseCase`.
    pub fn get_price_estimate_use_case(
        &self,
    ) -> GetPriceEstimateUseCase<L, LatestBatchPricingStrategy<F>, P, O, S> {
        GetPriceEstimateUseCase::new(self.engine())
    }

    /// Create a `GetRangeSummaryUseCase`.
    pub fn get_range_summary_use_case(&self) -> GetRangeSummaryUseCase<L> {
        GetRangeSummaryUseCase::new(Arc::clone(&self.logs))
    }

    /// Create a `RecordOperatingCostUseCase`.
    pub fn record_operating_cost_use_case(&self) -> RecordOperatingCostUseCase<O> {
        RecordOperatingCostUseCase::new(Arc::clone(&self.operating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::InMemorySnapshotStore;
    use crate::infrastructure::persistence::{
        InMemoryFeedBatchStore, InMemoryOperatingCostStore, InMemoryPayrollStore,
        InMemoryProductionLogStore,
    };

    fn container() -> Container<
        InMemoryProductionLogStore,
        InMemoryFeedBatchStore,
        InMemoryPayrollStore,
        InMemoryOperatingCostStore,
        InMemorySnapshotStore,
    > {
        Container::new(
            Arc::new(InMemoryProductionLogStore::new()),
            Arc::new(InMemoryFeedBatchStore::new()),
            Arc::new(InMemoryPayrollStore::new()),
            Arc::new(InMemoryOperatingCostStore::new()),
            Some(Arc::new(InMemorySnapshotStore::new())),
        )
    }

    #[test]
    fn container_exposes_ports() {
        let container = container();
        let _ = container.engine();
        let _ = container.logs();
        let _ = container.batches();
        let _ = container.payroll();
        let _ = container.operating();
        assert!(container.snapshots().is_some());
    }

    #[test]
    fn container_creates_use_cases() {
        let container = container();
        let _ = container.get_daily_cost_use_case();
        let _ = container.get_price_estimate_use_case();
        let _ = container.get_range_summary_use_case();
        let _ = container.record_operating_cost_use_case();
    }
}
