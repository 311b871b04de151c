//! Costing errors.

use std::fmt;

use crate::domain::shared::DomainError;

/// Errors surfaced by the cost engine and its use cases.
///
/// Divide-by-zero is never represented here: zero denominators collapse to
/// zero cost components by policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostingError {
    /// Missing or malformed caller input.
    InvalidInput {
        /// Field with the invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// A monthly operating-cost record already exists for the month.
    DuplicateMonth {
        /// Month key of the existing record.
        month: String,
    },

    /// A store read or write failed.
    Store {
        /// Description of the failure.
        message: String,
    },
}

impl fmt::Display for CostingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::DuplicateMonth { month } => {
                write!(f, "Operating cost record for {month} already exists")
            }
            Self::Store { message } => {
                write!(f, "Store operation failed: {message}")
            }
        }
    }
}

impl std::error::Error for CostingError {}

impl From<DomainError> for CostingError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => {
                Self::InvalidInput { field, message }
            }
        }
    }
}
