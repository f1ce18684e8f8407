//! `rdvault connect` — launch the remote-desktop client for a profile.

use crate::cli::{output, Cli};
use crate::errors::Result;
use crate::launch;

/// Execute the `connect` command.
pub fn execute(cli: &Cli, position: usize) -> Result<()> {
    let (_paths, settings, store) = super::open_store(cli)?;
    let index = super::position_to_index(position, &store)?;

    let profile = store.get(index)?;
    launch::launch(profile, &settings.rdp_client)?;

    output::success(&format!(
        "Connecting to '{}' ({}) as {}",
        profile.name, profile.address, profile.username
    ));

    Ok(())
}
