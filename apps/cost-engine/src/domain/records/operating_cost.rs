//! Monthly operating cost record.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, MonthKey};

/// Fixed overhead for one month.
///
/// One row per month; creating a second row for the same month is
/// rejected upstream as invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingCost {
    /// Month the costs cover.
    pub month: MonthKey,
    /// Supervisor salary.
    pub supervisor_salary: Money,
    /// Utilities.
    pub utilities: Money,
    /// Maintenance.
    pub maintenance: Money,
    /// Other overhead.
    pub other: Money,
}

impl OperatingCost {
    /// Sum of all overhead components.
    #[must_use]
    pub fn total(&self) -> Money {
        self.supervisor_salary + self.utilities + self.maintenance + self.other
    }
}
