//! Per-egg cost allocation.
//!
//! The pure arithmetic core of the engine: given one day's production
//! figures and the month's cost totals, derive the per-egg cost components
//! and suggested prices. No I/O happens here; the application layer
//! assembles [`AllocationInputs`] from the stores.

use rust_decimal::Decimal;

use super::breakdown::{CostBreakdown, PerEggCosts, SuggestedPrices};
use crate::domain::shared::{Money, safe_div};

/// Inputs to one day's cost allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationInputs {
    /// Eggs collected on the day.
    pub total_eggs: u64,
    /// Feed cost for the day's consumption.
    pub feed_cost: Money,
    /// Eggs collected in the day's month.
    pub monthly_eggs: u64,
    /// Calendar days in the day's month.
    pub days_in_month: u32,
    /// Total labor cost for the month.
    pub monthly_labor: Money,
    /// Total operating cost for the month.
    pub monthly_operating: Money,
}

/// Allocate one day's costs per egg.
///
/// Zero eggs short-circuits to an all-zero breakdown: no production means
/// no valid unit economics, not an error. Monthly costs are prorated over
/// calendar days and spread across the month's average daily production;
/// both denominators are guarded, so an empty month yields zero labor and
/// fixed components rather than a division failure.
#[must_use]
pub fn allocate(inputs: &AllocationInputs) -> CostBreakdown {
    if inputs.total_eggs == 0 {
        return CostBreakdown::zero();
    }

    let eggs = Decimal::from(inputs.total_eggs);
    let days = Decimal::from(inputs.days_in_month);
    let avg_daily = average_daily_production(inputs.monthly_eggs, inputs.days_in_month);

    let feed = inputs.feed_cost.per_unit(eggs);
    let labor = Money::new(safe_div(
        safe_div(inputs.monthly_labor.amount(), days),
        avg_daily,
    ));
    let fixed = Money::new(safe_div(
        safe_div(inputs.monthly_operating.amount(), days),
        avg_daily,
    ));
    // Reserved: bird-acquisition cost amortized over laying life, pending a
    // bird-cost data source.
    let health = Money::ZERO;

    let per_egg = PerEggCosts {
        feed,
        labor,
        fixed,
        health,
    };
    let suggested_prices = SuggestedPrices::from_total(per_egg.total());

    CostBreakdown {
        per_egg,
        suggested_prices,
    }
}

/// Average eggs per calendar day for a month.
#[must_use]
pub fn average_daily_production(monthly_eggs: u64, days_in_month: u32) -> Decimal {
    safe_div(Decimal::from(monthly_eggs), Decimal::from(days_in_month))
}
