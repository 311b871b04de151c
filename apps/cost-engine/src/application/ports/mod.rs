//! Application Ports (Driven)
//!
//! Store interfaces the engine consumes. The surrounding CRUD subsystems
//! own the underlying tables; the engine reads them through these ports
//! and writes only the daily cost snapshot.

use thiserror::Error;

use crate::domain::costing::CostingError;

mod feed_batch_store;
mod operating_cost_store;
mod payroll_store;
mod production_log_store;
mod snapshot_store;

pub use feed_batch_store::FeedBatchStore;
pub use operating_cost_store::OperatingCostStore;
pub use payroll_store::PayrollStore;
pub use production_log_store::ProductionLogStore;
pub use snapshot_store::{InMemorySnapshotStore, SnapshotStore};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed.
    #[error("store backend error: {message}")]
    Backend {
        /// Error message.
        message: String,
    },
}

impl StoreError {
    /// Create a backend error from any displayable cause.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

impl From<StoreError> for CostingError {
    fn from(err: StoreError) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}
