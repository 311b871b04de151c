//! Cost reporting DTOs.
//!
//! Wire shapes for the HTTP layer. Currency values are rounded to 4
//! decimal places here; full precision stays internal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::costing::{DailyCostReport, ProductionTotals, SuggestedPrices};
use crate::domain::shared::LogDate;

/// Daily cost breakdown view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCostDto {
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    /// Total eggs collected on the date.
    pub total_eggs: u64,
    /// Total feed consumed in kilograms.
    pub total_feed_kg: Decimal,
    /// Feed cost for the date's consumption.
    pub feed_cost: Decimal,
    /// Feed cost per egg.
    pub feed_cost_per_egg: Decimal,
}

impl DailyCostDto {
    /// Project the daily-cost view from a report.
    #[must_use]
    pub fn from_report(report: &DailyCostReport) -> Self {
        Self {
            date: report.date.to_string(),
            total_eggs: report.production.total_eggs,
            total_feed_kg: report.production.total_feed_kg,
            feed_cost: report.feed_cost.rounded(),
            feed_cost_per_egg: report.breakdown.per_egg.feed.rounded(),
        }
    }
}

/// Production summary over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummaryDto {
    /// Inclusive range start in `YYYY-MM-DD` form.
    pub start: String,
    /// Inclusive range end in `YYYY-MM-DD` form.
    pub end: String,
    /// Total eggs collected in the range.
    pub total_eggs: u64,
    /// Total feed consumed in the range, in kilograms.
    pub total_feed_kg: Decimal,
}

impl RangeSummaryDto {
    /// Build from range bounds and their production totals.
    #[must_use]
    pub fn new(start: LogDate, end: LogDate, totals: ProductionTotals) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            total_eggs: totals.total_eggs,
            total_feed_kg: totals.total_feed_kg,
        }
    }
}

/// Suggested sale prices per grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedPricesDto {
    /// Grade A price.
    pub grade_a: Decimal,
    /// Grade B price.
    pub grade_b: Decimal,
    /// Grade C price.
    pub grade_c: Decimal,
}

impl From<SuggestedPrices> for SuggestedPricesDto {
    fn from(prices: SuggestedPrices) -> Self {
        Self {
            grade_a: prices.grade_a.rounded(),
            grade_b: prices.grade_b.rounded(),
            grade_c: prices.grade_c.rounded(),
        }
    }
}

/// Price estimate view: per-egg cost components plus suggested prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimateDto {
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    /// Total eggs logged in the date's month.
    pub avg_monthly_production: u64,
    /// Average eggs per calendar day for the month.
    pub avg_daily_production: Decimal,
    /// Feed cost per egg.
    pub feed_cost_per_egg: Decimal,
    /// Labor cost per egg.
    pub labor_cost_per_egg: Decimal,
    /// Fixed overhead cost per egg.
    pub fixed_cost_per_egg: Decimal,
    /// Health cost per egg.
    pub health_cost_per_egg: Decimal,
    /// Total cost per egg.
    pub total_cost_per_egg: Decimal,
    /// Suggested sale prices per grade.
    pub suggested_prices: SuggestedPricesDto,
}

impl PriceEstimateDto {
    /// Project the price-estimate view from a report.
    #[must_use]
    pub fn from_report(report: &DailyCostReport) -> Self {
        Self {
            date: report.date.to_string(),
            avg_monthly_production: report.monthly_production,
            avg_daily_production: report.avg_daily_production.round_dp(2),
            feed_cost_per_egg: report.breakdown.per_egg.feed.rounded(),
            labor_cost_per_egg: report.breakdown.per_egg.labor.rounded(),
            fixed_cost_per_egg: report.breakdown.per_egg.fixed.rounded(),
            health_cost_per_egg: report.breakdown.per_egg.health.rounded(),
            total_cost_per_egg: report.breakdown.total_cost_per_egg().rounded(),
            suggested_prices: report.breakdown.suggested_prices.into(),
        }
    }
}

/// Request to create a monthly operating-cost record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOperatingCostDto {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Supervisor salary.
    pub supervisor_salary: Decimal,
    /// Utilities.
    pub utilities: Decimal,
    /// Maintenance.
    pub maintenance: Decimal,
    /// Other overhead.
    pub other: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::costing::{AllocationInputs, allocate, average_daily_production};
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    fn report() -> DailyCostReport {
        let inputs = AllocationInputs {
            total_eggs: 160,
            feed_cost: Money::new(dec!(34.125)),
            monthly_eggs: 4960,
            days_in_month: 31,
            monthly_labor: Money::new(dec!(2480)),
            monthly_operating: Money::new(dec!(1240)),
        };
        DailyCostReport {
            date: LogDate::parse("2025-08-01").unwrap(),
            production: ProductionTotals {
                total_eggs: 160,
                total_feed_kg: dec!(45.5),
            },
            feed_cost: Money::new(dec!(34.125)),
            monthly_production: 4960,
            avg_daily_production: average_daily_production(4960, 31),
            breakdown: allocate(&inputs),
        }
    }

    #[test]
    fn daily_cost_dto_rounds_per_egg_cost() {
        let dto = DailyCostDto::from_report(&report());
        assert_eq!(dto.date, "2025-08-01");
        assert_eq!(dto.total_eggs, 160);
        assert_eq!(dto.feed_cost, dec!(34.125));
        // 34.125 / 160 = 0.21328125, rounded to 4 places
        assert_eq!(dto.feed_cost_per_egg, dec!(0.2133));
    }

    #[test]
    fn price_estimate_dto_carries_all_components() {
        let dto = PriceEstimateDto::from_report(&report());
        assert_eq!(dto.avg_monthly_production, 4960);
        assert_eq!(dto.avg_daily_production, dec!(160));
        assert_eq!(dto.feed_cost_per_egg, dec!(0.2133));
        assert_eq!(dto.labor_cost_per_egg, dec!(0.5000));
        assert_eq!(dto.fixed_cost_per_egg, dec!(0.2500));
        assert_eq!(dto.health_cost_per_egg, dec!(0.0000));
        assert_eq!(
            dto.total_cost_per_egg,
            dec!(0.2133) + dec!(0.5000) + dec!(0.2500),
        );
    }

    #[test]
    fn price_estimate_dto_prices_are_ordered() {
        let dto = PriceEstimateDto::from_report(&report());
        assert!(dto.suggested_prices.grade_a >= dto.suggested_prices.grade_b);
        assert!(dto.suggested_prices.grade_b >= dto.suggested_prices.grade_c);
    }

    #[test]
    fn range_summary_dto_formats_bounds() {
        let dto = RangeSummaryDto::new(
            LogDate::parse("2025-08-01").unwrap(),
            LogDate::parse("2025-08-07").unwrap(),
            ProductionTotals {
                total_eggs: 1120,
                total_feed_kg: dec!(318.5),
            },
        );
        assert_eq!(dto.start, "2025-08-01");
        assert_eq!(dto.end, "2025-08-07");
        assert_eq!(dto.total_eggs, 1120);
    }

    #[test]
    fn dto_serde_roundtrip() {
        let dto = PriceEstimateDto::from_report(&report());
        let json = serde_json::to_string(&dto).unwrap();
        let parsed: PriceEstimateDto = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dto);
    }
}
