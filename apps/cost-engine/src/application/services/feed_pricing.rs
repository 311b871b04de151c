//! Feed pricing strategies.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FeedBatchStore, StoreError};
use crate::domain::shared::Money;

/// Strategy for resolving the current feed price per kilogram.
///
/// Isolated behind a trait so the latest-batch heuristic can be replaced
/// by a weighted-average or FIFO strategy without touching the engine.
#[async_trait]
pub trait FeedPricingStrategy: Send + Sync {
    /// Current cost of one kilogram of feed.
    async fn current_unit_cost(&self) -> Result<Money, StoreError>;
}

/// Prices feed at the unit cost of the most recently dated batch.
///
/// This is an approximation: the rate of the latest batch applies to all
/// consumption regardless of which batch was actually drawn down. With no
/// batch on record the unit cost is zero.
pub struct LatestBatchPricingStrategy<F>
where
    F: FeedBatchStore,
{
    batches: Arc<F>,
}

impl<F> LatestBatchPricingStrategy<F>
where
    F: FeedBatchStore,
{
    /// Create a new strategy over a feed batch store.
    pub fn new(batches: Arc<F>) -> Self {
        Self { batches }
    }
}

#[async_trait]
impl<F> FeedPricingStrategy for LatestBatchPricingStrategy<F>
where
    F: FeedBatchStore,
{
    async fn current_unit_cost(&self) -> Result<Money, StoreError> {
        let latest = self.batches.find_latest().await?;
        Ok(latest.map_or(Money::ZERO, |batch| batch.unit_cost()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::FeedBatch;
    use crate::domain::shared::LogDate;
    use crate::infrastructure::persistence::InMemoryFeedBatchStore;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn latest_batch_unit_cost() {
        let store = InMemoryFeedBatchStore::new();
        store.add(FeedBatch {
            batch_date: LogDate::parse("2025-07-01").unwrap(),
            quantity_kg: dec!(500),
            total_cost: Money::new(dec!(300)),
        });
        store.add(FeedBatch {
            batch_date: LogDate::parse("2025-07-28").unwrap(),
            quantity_kg: dec!(400),
            total_cost: Money::new(dec!(300)),
        });

        let strategy = LatestBatchPricingStrategy::new(Arc::new(store));
        // Most recent batch: 300 / 400 = 0.75 per kg
        assert_eq!(strategy.current_unit_cost().await.unwrap().amount(), dec!(0.75));
    }

    #[tokio::test]
    async fn no_batches_prices_at_zero() {
        let strategy = LatestBatchPricingStrategy::new(Arc::new(InMemoryFeedBatchStore::new()));
        assert_eq!(strategy.current_unit_cost().await.unwrap(), Money::ZERO);
    }
}
