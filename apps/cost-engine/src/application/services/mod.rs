//! Application services.
//!
//! Aggregation and allocation services that orchestrate the domain math
//! over the store ports.

mod cost_allocation;
mod feed_pricing;
mod monthly_aggregator;
mod production_aggregator;

pub use cost_allocation::CostAllocationEngine;
pub use feed_pricing::{FeedPricingStrategy, LatestBatchPricingStrategy};
pub use monthly_aggregator::MonthlyAggregator;
pub use production_aggregator::ProductionAggregator;
