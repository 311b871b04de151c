//! Month key value object for bucketing monthly cost records.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;
use crate::domain::shared::value_objects::LogDate;

/// A calendar month in `YYYY-MM` form.
///
/// Payroll and operating-cost records are bucketed by this key, and the
/// engine derives its proration denominators from it. The month is
/// validated to 1..=12 at construction, so day arithmetic below cannot
/// land outside the calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a new MonthKey.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidValue {
                field: "month".to_string(),
                message: format!("month must be 1-12, got {month}"),
            });
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse from a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the string is not a valid
    /// `YYYY-MM` month key.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidValue {
            field: "month".to_string(),
            message: format!("expected YYYY-MM, got '{s}'"),
        };
        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// The year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Number of calendar days in this month, leap years included.
    #[must_use]
    pub const fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            // month is validated to 1..=12 at construction
            _ => 31,
        }
    }

    /// Number of working days in this month: all days except Sundays.
    ///
    /// Computed for reporting; the cost formulas prorate over calendar
    /// days (see the allocation pipeline).
    #[must_use]
    pub fn working_days(&self) -> u32 {
        let mut count = 0;
        for day in 1..=self.days_in_month() {
            if let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) {
                if date.weekday() != Weekday::Sun {
                    count += 1;
                }
            }
        }
        count
    }

    /// First calendar day of this month.
    #[must_use]
    pub fn first_day(&self) -> LogDate {
        LogDate::new(
            NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default(),
        )
    }

    /// Last calendar day of this month.
    #[must_use]
    pub fn last_day(&self) -> LogDate {
        LogDate::new(
            NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
                .unwrap_or_default(),
        )
    }

    const fn is_leap_year(&self) -> bool {
        (self.year % 4 == 0 && self.year % 100 != 0) || self.year % 400 == 0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}
