//! Persisted daily cost snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::costing::SuggestedPrices;
use crate::domain::shared::{LogDate, Money};

/// The computed cost breakdown for one date, persisted for reporting.
///
/// A cache artifact, not a source of truth: re-running the engine against
/// the same underlying logs and cost records must reproduce it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCostSnapshot {
    /// Date the snapshot covers.
    pub date: LogDate,
    /// Feed cost per egg.
    pub feed_cost_per_egg: Money,
    /// Labor cost per egg.
    pub labor_cost_per_egg: Money,
    /// Fixed overhead cost per egg.
    pub fixed_cost_per_egg: Money,
    /// Health cost per egg.
    pub health_cost_per_egg: Money,
    /// Total cost per egg.
    pub total_cost_per_egg: Money,
    /// Suggested sale prices per grade.
    pub suggested_prices: SuggestedPrices,
}
