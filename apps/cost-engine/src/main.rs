//! Cost Engine Binary
//!
//! Offline cost report: seeds the in-memory stores from a farm data
//! fixture, runs the cost allocation pipeline for one date, and prints
//! the price estimate as JSON.
//!
//! # Usage
//!
//! ```bash
//! REPORT_DATE=2025-08-01 cargo run --bin cost-engine
//! ```
//!
//! # Environment Variables
//!
//! - `COST_ENGINE_CONFIG`: Config file path (default: config.yaml, optional)
//! - `REPORT_DATE`: Report date, overrides the configured date
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::Result;
use cost_engine::application::dto::{DailyCostDto, PriceEstimateDto};
use cost_engine::application::ports::InMemorySnapshotStore;
use cost_engine::config::{Config, load_config};
use cost_engine::infrastructure::config::Container;
use cost_engine::infrastructure::persistence::{FarmFixture, SeededStores};
use cost_engine::telemetry::init_tracing;
use cost_engine::{CostingError, LogDate};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    tracing::info!("Starting Coopworks cost engine");

    let config_path = std::env::var("COST_ENGINE_CONFIG").ok();
    let config = load_config(config_path.as_deref())?;

    let date = report_date(&config)?;
    tracing::info!(date = %date, fixture = %config.report.fixture_path, "running cost report");

    let fixture = FarmFixture::load(&config.report.fixture_path)?;
    let stores = fixture.into_stores();
    let container = build_container(stores, config.persistence.enabled);

    let engine = container.engine();
    let report = engine.calculate_and_store(date).await?;

    if let Some(snapshots) = container.snapshots() {
        tracing::info!(stored = snapshots.len(), "snapshots persisted");
    }

    let daily = DailyCostDto::from_report(&report);
    let estimate = PriceEstimateDto::from_report(&report);
    tracing::info!(
        total_eggs = daily.total_eggs,
        feed_cost = %daily.feed_cost,
        total_cost_per_egg = %estimate.total_cost_per_egg,
        "cost report complete",
    );

    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}

/// Resolve the report date from env or config.
fn report_date(config: &Config) -> Result<LogDate, CostingError> {
    let raw = std::env::var("REPORT_DATE")
        .ok()
        .or_else(|| config.report.date.clone())
        .ok_or_else(|| CostingError::InvalidInput {
            field: "date".to_string(),
            message: "set REPORT_DATE or report.date in config".to_string(),
        })?;
    Ok(LogDate::parse(&raw)?)
}

/// Wire seeded stores into a container, with snapshot persistence when
/// enabled.
fn build_container(
    stores: SeededStores,
    persistence_enabled: bool,
) -> Container<
    cost_engine::InMemoryProductionLogStore,
    cost_engine::InMemoryFeedBatchStore,
    cost_engine::InMemoryPayrollStore,
    cost_engine::InMemoryOperatingCostStore,
    InMemorySnapshotStore,
> {
    let snapshots = if persistence_enabled {
        Some(Arc::new(InMemorySnapshotStore::new()))
    } else {
        None
    };
    Container::new(
        Arc::new(stores.logs),
        Arc::new(stores.batches),
        Arc::new(stores.payroll),
        Arc::new(stores.operating),
        snapshots,
    )
}
