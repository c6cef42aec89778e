//! Missions subcommand: fetch and print the mission list.

use anyhow::{Context, Result};
use interop_client::Client;

/// Fetch all missions in one call and print one pretty-printed JSON object
/// per mission, in the order the server returned them.
pub fn handle_missions(client: &Client) -> Result<()> {
    let missions = client.get_missions().context("failed to fetch missions")?;
    for mission in &missions {
        let rendered =
            serde_json::to_string_pretty(mission).context("failed to render mission")?;
        println!("{}", rendered);
    }
    Ok(())
}
