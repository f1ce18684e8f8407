//! `rdvault restore` — overwrite the data file from a backup.

use std::path::Path;

use dialoguer::Confirm;

use crate::cli::{output, Cli};
use crate::errors::{RdVaultError, Result};
use crate::store::LoadOutcome;

/// Execute the `restore` command.
pub fn execute(cli: &Cli, source: &Path, force: bool) -> Result<()> {
    let (_paths, _settings, mut store) = super::open_store(cli)?;

    // Restoring replaces whatever is currently stored.
    if !force && !store.is_empty() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Replace the current {} profile(s) with the backup?",
                store.len()
            ))
            .default(false)
            .interact()
            .map_err(|e| RdVaultError::PromptFailed(e.to_string()))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    match store.restore(source)? {
        LoadOutcome::Loaded => {
            output::success(&format!(
                "Restored {} profile(s) from {}",
                store.len(),
                source.display()
            ));
        }
        LoadOutcome::Recovered => {
            output::warning("The backup could not be decrypted with the current key.");
            output::tip("The restored bytes are in place; the profile list stays empty until a matching key is available.");
        }
    }

    Ok(())
}
