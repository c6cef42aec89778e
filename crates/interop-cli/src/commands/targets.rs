//! Targets subcommand: upload target records and thumbnails.

use std::path::Path;

use anyhow::{Context, Result};
use interop_client::{upload_legacy_targets, upload_targets, Client};

/// Upload targets from `target_dir`, or from a legacy 2016 tab-delimited
/// file when one is supplied. The two routes are exclusive: a legacy file
/// path always takes the legacy route, never the 2017 directory scan.
pub fn handle_targets(
    client: &Client,
    target_dir: &Path,
    legacy_filepath: Option<&Path>,
) -> Result<()> {
    let report = match legacy_filepath {
        Some(legacy) => upload_legacy_targets(client, legacy, target_dir).with_context(|| {
            format!("failed to upload legacy targets from {}", legacy.display())
        })?,
        None => upload_targets(client, target_dir)
            .with_context(|| format!("failed to upload targets from {}", target_dir.display()))?,
    };

    println!("Uploaded {} targets", report.uploaded());
    Ok(())
}
