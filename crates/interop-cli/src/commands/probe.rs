//! Probe subcommand: periodic telemetry/obstacle request cycles.

use anyhow::{Context, Result};
use interop_client::{probe, CancelToken, Client};
use tracing::debug;

/// Run the probe loop until the operator interrupts it.
///
/// The interrupt handler only sets the cancellation token; the loop exits at
/// its next suspension point and the process ends with a success status.
/// Request errors propagate and exit nonzero.
pub fn handle_probe(client: &Client, interop_time: f64) -> Result<()> {
    let period = probe::period_from_secs(interop_time).context("invalid --interop-time")?;

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install the interrupt handler")?;

    let stats = probe::run_probe(client, period, &cancel).context("probe cycle failed")?;
    debug!(cycles = stats.cycles, "probe loop stopped");
    Ok(())
}
