//! Payroll record.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, MonthKey};

/// Net pay for one laborer for one month.
///
/// Generated by the payroll subsystem; the engine sums these per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Month the pay covers.
    pub month: MonthKey,
    /// Laborer identifier.
    pub laborer_id: String,
    /// Net pay for the month.
    pub net_pay: Money,
}
