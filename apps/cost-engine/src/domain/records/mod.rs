//! Read-model records.
//!
//! Rows owned by the surrounding CRUD subsystems (logging, feed batching,
//! payroll, operating costs). The engine reads them through store ports and
//! never mutates them. The daily cost snapshot is the one record this crate
//! owns and writes.

mod feed_batch;
mod operating_cost;
mod payroll;
mod production_log;
mod snapshot;

pub use feed_batch::FeedBatch;
pub use operating_cost::OperatingCost;
pub use payroll::PayrollRecord;
pub use production_log::ProductionLog;
pub use snapshot::DailyCostSnapshot;
