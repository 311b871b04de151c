//! Production log record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{EggCounts, LogDate};

/// One day of production for one house.
///
/// Created by field staff through the logging subsystem; the cost engine
/// only reads these rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionLog {
    /// Log date.
    pub date: LogDate,
    /// House identifier.
    pub house_id: String,
    /// Egg counts by grade.
    pub eggs: EggCounts,
    /// Feed consumed in kilograms.
    pub feed_kg: Decimal,
    /// Birds lost that day.
    pub mortality: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn production_log_serde_roundtrip() {
        let log = ProductionLog {
            date: LogDate::parse("2025-08-01").unwrap(),
            house_id: "house-1".to_string(),
            eggs: EggCounts::new(100, 40, 20),
            feed_kg: dec!(45.5),
            mortality: 2,
        };
        let json = serde_json::to_string(&log).unwrap();
        let parsed: ProductionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }
}
