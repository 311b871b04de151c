//! Cost breakdown value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::records::DailyCostSnapshot;
use crate::domain::shared::{EggGrade, LogDate, Money};

/// Summed production figures for a day or date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTotals {
    /// Total eggs across all grades and houses.
    pub total_eggs: u64,
    /// Total feed consumed in kilograms.
    pub total_feed_kg: Decimal,
}

/// Per-egg cost components.
///
/// The health component is reserved for bird-acquisition cost amortized
/// over laying life; it stays zero until a bird-cost data source exists,
/// but remains a named component so the total stays extensible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerEggCosts {
    /// Feed cost per egg.
    pub feed: Money,
    /// Labor cost per egg.
    pub labor: Money,
    /// Fixed overhead cost per egg.
    pub fixed: Money,
    /// Health cost per egg.
    pub health: Money,
}

impl PerEggCosts {
    /// Total cost per egg across all components.
    #[must_use]
    pub fn total(&self) -> Money {
        self.feed + self.labor + self.fixed + self.health
    }
}

/// Suggested sale prices per grade, derived from total cost per egg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPrices {
    /// Grade A price.
    pub grade_a: Money,
    /// Grade B price.
    pub grade_b: Money,
    /// Grade C price.
    pub grade_c: Money,
}

impl SuggestedPrices {
    /// Apply the fixed grade markups to a total cost per egg.
    #[must_use]
    pub fn from_total(total_cost_per_egg: Money) -> Self {
        Self {
            grade_a: total_cost_per_egg * EggGrade::A.markup(),
            grade_b: total_cost_per_egg * EggGrade::B.markup(),
            grade_c: total_cost_per_egg * EggGrade::C.markup(),
        }
    }
}

/// A complete cost breakdown: per-egg components plus suggested prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Per-egg cost components.
    pub per_egg: PerEggCosts,
    /// Suggested sale prices per grade.
    pub suggested_prices: SuggestedPrices,
}

impl CostBreakdown {
    /// All-zero breakdown: no production, no valid unit economics.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Total cost per egg.
    #[must_use]
    pub fn total_cost_per_egg(&self) -> Money {
        self.per_egg.total()
    }
}

/// The full result of one daily cost computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCostReport {
    /// Date the report covers.
    pub date: LogDate,
    /// Production figures for the date.
    pub production: ProductionTotals,
    /// Feed cost for the date's consumption.
    pub feed_cost: Money,
    /// Total eggs logged in the date's month.
    pub monthly_production: u64,
    /// Average eggs per calendar day for the month.
    pub avg_daily_production: Decimal,
    /// The cost breakdown.
    pub breakdown: CostBreakdown,
}

impl DailyCostReport {
    /// Report for a date with no logged production.
    #[must_use]
    pub fn empty(date: LogDate) -> Self {
        Self {
            date,
            production: ProductionTotals::default(),
            feed_cost: Money::ZERO,
            monthly_production: 0,
            avg_daily_production: Decimal::ZERO,
            breakdown: CostBreakdown::zero(),
        }
    }

    /// The persistable snapshot of this report.
    #[must_use]
    pub fn snapshot(&self) -> DailyCostSnapshot {
        DailyCostSnapshot {
            date: self.date,
            feed_cost_per_egg: self.breakdown.per_egg.feed,
            labor_cost_per_egg: self.breakdown.per_egg.labor,
            fixed_cost_per_egg: self.breakdown.per_egg.fixed,
            health_cost_per_egg: self.breakdown.per_egg.health,
            total_cost_per_egg: self.breakdown.total_cost_per_egg(),
            suggested_prices: self.breakdown.suggested_prices,
        }
    }
}
