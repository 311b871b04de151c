//! Calendar date value object for production logs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;
use crate::domain::shared::value_objects::MonthKey;

/// A calendar date in `YYYY-MM-DD` form.
///
/// All log rows, snapshots, and cost computations are keyed by this type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LogDate(NaiveDate);

impl LogDate {
    /// Create a new LogDate from a NaiveDate.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the string is not a valid
    /// calendar date in `YYYY-MM-DD` form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DomainError::InvalidValue {
                field: "date".to_string(),
                message: format!("expected YYYY-MM-DD, got '{s}'"),
            })
    }

    /// Get the inner NaiveDate.
    #[must_use]
    pub const fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// The month this date falls in.
    #[must_use]
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.0)
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for LogDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_date_parse_valid() {
        let d = LogDate::parse("2025-08-01").unwrap();
        assert_eq!(format!("{d}"), "2025-08-01");
    }

    #[test]
    fn log_date_parse_rejects_malformed() {
        assert!(LogDate::parse("01-08-2025").is_err());
        assert!(LogDate::parse("2025-13-01").is_err());
        assert!(LogDate::parse("2025-02-30").is_err());
        assert!(LogDate::parse("").is_err());
        assert!(LogDate::parse("not-a-date").is_err());
    }

    #[test]
    fn log_date_parse_error_names_field() {
        let err = LogDate::parse("garbage").unwrap_err();
        assert!(format!("{err}").contains("date"));
    }

    #[test]
    fn log_date_month_key() {
        let d = LogDate::parse("2025-08-15").unwrap();
        assert_eq!(format!("{}", d.month_key()), "2025-08");
    }

    #[test]
    fn log_date_ordering() {
        let a = LogDate::parse("2025-08-01").unwrap();
        let b = LogDate::parse("2025-08-02").unwrap();
        assert!(a < b);
    }

    #[test]
    fn log_date_serde_roundtrip() {
        let d = LogDate::parse("2025-08-01").unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2025-08-01\"");
        let parsed: LogDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }
}
