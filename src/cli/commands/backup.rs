//! `rdvault backup` — copy the encrypted data file to a new location.

use std::path::Path;

use crate::cli::{output, Cli};
use crate::errors::Result;

/// Execute the `backup` command.
///
/// The bytes are copied verbatim: the backup stays encrypted and is
/// only restorable by a process holding the matching key file.
pub fn execute(cli: &Cli, destination: &Path) -> Result<()> {
    let (_paths, _settings, store) = super::open_store(cli)?;

    store.backup(destination)?;

    output::success(&format!("Backup written to {}", destination.display()));
    output::tip("The backup is encrypted — it is only usable together with your key file.");

    Ok(())
}
