//! Data transfer objects for API boundaries.

mod cost_dto;

pub use cost_dto::{
    DailyCostDto, PriceEstimateDto, RangeSummaryDto, RecordOperatingCostDto,
    SuggestedPricesDto,
};
