//! `rdvault delete` — remove the profile at a list position.

use dialoguer::Confirm;

use crate::cli::{output, Cli};
use crate::errors::{RdVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, position: usize, force: bool) -> Result<()> {
    let (_paths, _settings, mut store) = super::open_store(cli)?;
    let index = super::position_to_index(position, &store)?;

    let name = store.get(index)?.name.clone();

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete profile '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| RdVaultError::PromptFailed(e.to_string()))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.delete(index)?;

    output::success(&format!("Deleted profile '{name}'"));

    Ok(())
}
