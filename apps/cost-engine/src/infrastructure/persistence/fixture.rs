//! Fixture data loading.
//!
//! Seeds the in-memory stores from a JSON file. Used by the offline
//! report binary and the integration tests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::in_memory::{
    InMemoryFeedBatchStore, InMemoryOperatingCostStore, InMemoryPayrollStore,
    InMemoryProductionLogStore,
};
use crate::domain::records::{FeedBatch, OperatingCost, PayrollRecord, ProductionLog};

/// Errors from fixture loading.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read the fixture file.
    #[error("failed to read fixture '{path}': {source}")]
    Read {
        /// Path to the fixture file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the fixture JSON.
    #[error("failed to parse fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A full set of farm records for seeding stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmFixture {
    /// Production log rows.
    #[serde(default)]
    pub production_logs: Vec<ProductionLog>,
    /// Feed batches.
    #[serde(default)]
    pub feed_batches: Vec<FeedBatch>,
    /// Payroll records.
    #[serde(default)]
    pub payroll_records: Vec<PayrollRecord>,
    /// Monthly operating costs.
    #[serde(default)]
    pub operating_costs: Vec<OperatingCost>,
}

impl FarmFixture {
    /// Load a fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Parse a fixture from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Parse` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed fresh in-memory stores with this fixture's records.
    #[must_use]
    pub fn into_stores(self) -> SeededStores {
        let logs = InMemoryProductionLogStore::new();
        for log in self.production_logs {
            logs.add(log);
        }
        let batches = InMemoryFeedBatchStore::new();
        for batch in self.feed_batches {
            batches.add(batch);
        }
        let payroll = InMemoryPayrollStore::new();
        for record in self.payroll_records {
            payroll.add(record);
        }
        let operating = InMemoryOperatingCostStore::new();
        for record in self.operating_costs {
            operating.add(record);
        }
        SeededStores {
            logs,
            batches,
            payroll,
            operating,
        }
    }
}

/// In-memory stores seeded from a fixture.
#[derive(Debug, Default)]
pub struct SeededStores {
    /// Production log store.
    pub logs: InMemoryProductionLogStore,
    /// Feed batch store.
    pub batches: InMemoryFeedBatchStore,
    /// Payroll store.
    pub payroll: InMemoryPayrollStore,
    /// Operating cost store.
    pub operating: InMemoryOperatingCostStore,
}
