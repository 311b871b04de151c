//! Persistence adapters.

mod fixture;
mod in_memory;

pub use fixture::{FarmFixture, FixtureError, SeededStores};
pub use in_memory::{
    InMemoryFeedBatchStore, InMemoryOperatingCostStore, InMemoryPayrollStore,
    InMemoryProductionLogStore,
};
