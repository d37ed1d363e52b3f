//! # Jobchain Node Runtime
//!
//! The main entry point for a Jobchain node.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs and metrics) from the environment
//! 2. Load genesis and review ledger configuration
//! 3. Run genesis: token, lister funding, review ledger, authorizations
//! 4. Stream committed ledger events to the log
//! 5. Wait for Ctrl+C, then shut down

use anyhow::{Context, Result};
use jc_02_review_ledger::config::LedgerConfig;
use jobchain_telemetry::{init_telemetry, TelemetryConfig};
use node_runtime::{spawn_event_logger, GenesisBuilder, GenesisConfig};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let genesis = GenesisConfig::from_env().context("Failed to load genesis configuration")?;
    let ledger = LedgerConfig::from_env().context("Failed to load review ledger configuration")?;

    info!("===========================================");
    info!("  Jobchain Node Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let node = GenesisBuilder::new(genesis, ledger)
        .build()
        .await
        .context("Genesis failed")?;
    let logger = spawn_event_logger(&node.bus);

    info!(
        owner = %node.ledger_config.owner,
        ledger_address = %node.ledger_config.ledger_address,
        fee_enabled = node.ledger_config.fee_enabled,
        "Node is running. Press Ctrl+C to stop."
    );
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    let stats = node.service.stats().await;
    info!(
        committed = stats.calls_committed,
        rejected = stats.calls_rejected,
        events = stats.events_published,
        "Shutting down"
    );

    match jobchain_telemetry::encode_metrics() {
        Ok(metrics) => debug!(%metrics, "Final metrics"),
        Err(e) => warn!(error = %e, "Failed to encode metrics"),
    }

    // Dropping the node closes the bus, which ends the logger.
    drop(node);
    if let Err(e) = logger.await {
        warn!(error = %e, "Event logger task failed");
    }

    Ok(())
}
