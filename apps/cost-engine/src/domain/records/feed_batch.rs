//! Feed batch record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{LogDate, Money};

/// A produced quantity of feed.
///
/// The batching subsystem owns these rows; the engine reads only the most
/// recently dated batch to price feed consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedBatch {
    /// Date the batch was produced.
    pub batch_date: LogDate,
    /// Quantity produced in kilograms.
    pub quantity_kg: Decimal,
    /// Total production cost of the batch.
    pub total_cost: Money,
}

impl FeedBatch {
    /// Cost per kilogram: total cost over quantity, zero for an empty batch.
    #[must_use]
    pub fn unit_cost(&self) -> Money {
        self.total_cost.per_unit(self.quantity_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn batch(quantity_kg: Decimal, total_cost: Decimal) -> FeedBatch {
        FeedBatch {
            batch_date: LogDate::parse("2025-07-28").unwrap(),
            quantity_kg,
            total_cost: Money::new(total_cost),
        }
    }

    #[test]
    fn unit_cost_divides_total_by_quantity() {
        let b = batch(dec!(500), dec!(375));
        assert_eq!(b.unit_cost().amount(), dec!(0.75));
    }

    #[test]
    fn unit_cost_zero_quantity_is_zero() {
        let b = batch(Decimal::ZERO, dec!(375));
        assert_eq!(b.unit_cost(), Money::ZERO);
    }
}
