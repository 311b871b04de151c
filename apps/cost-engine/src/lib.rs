// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Cost Engine - Rust Core Library
//!
//! Per-egg cost allocation for the Coopworks farm operations system.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, records, allocation math)
//!   - `shared`: Money, dates, egg grades, shared errors
//!   - `records`: Production logs, feed batches, payroll, operating costs,
//!     daily cost snapshots
//!   - `costing`: The stateless allocation pipeline and its result types
//!
//! - **Application**: Orchestration over ports
//!   - `ports`: Store interfaces (`ProductionLogStore`, `FeedBatchStore`,
//!     `PayrollStore`, `OperatingCostStore`, `SnapshotStore`)
//!   - `services`: Aggregators, feed pricing strategies, the allocation engine
//!   - `use_cases`: `GetDailyCost`, `GetRangeSummary`, `GetPriceEstimate`,
//!     `RecordOperatingCost`
//!   - `dto`: Wire shapes for the HTTP layer
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: In-memory stores and fixture loading
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Services, use cases, and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and wiring.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::costing::{
    AllocationInputs, CostBreakdown, CostingError, DailyCostReport, PerEggCosts,
    ProductionTotals, SuggestedPrices, allocate, average_daily_production,
};
pub use domain::records::{
    DailyCostSnapshot, FeedBatch, OperatingCost, PayrollRecord, ProductionLog,
};
pub use domain::shared::{EggCounts, EggGrade, LogDate, Money, MonthKey, safe_div};

// Application re-exports
pub use application::dto::{
    DailyCostDto, PriceEstimateDto, RangeSummaryDto, RecordOperatingCostDto,
    SuggestedPricesDto,
};
pub use application::ports::{
    FeedBatchStore, InMemorySnapshotStore, OperatingCostStore, PayrollStore,
    ProductionLogStore, SnapshotStore, StoreError,
};
pub use application::services::{
    CostAllocationEngine, FeedPricingStrategy, LatestBatchPricingStrategy,
    MonthlyAggregator, ProductionAggregator,
};
pub use application::use_cases::{
    GetDailyCostUseCase, GetPriceEstimateUseCase, GetRangeSummaryUseCase,
    RecordOperatingCostUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::{Container, EngineFor};
pub use infrastructure::persistence::{
    FarmFixture, FixtureError, InMemoryFeedBatchStore, InMemoryOperatingCostStore,
    InMemoryPayrollStore, InMemoryProductionLogStore, SeededStores,
};
