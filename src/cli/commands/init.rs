//! `rdvault init` — create the key and an encrypted empty profile list.

use crate::cli::{output, Cli};
use crate::errors::Result;

/// Execute the `init` command.
///
/// `open_store` already does the real work (key generation, encrypted
/// empty collection on first run); this command exists so the store can
/// be set up explicitly before the first `add`.  Running it against an
/// existing store is harmless.
pub fn execute(cli: &Cli) -> Result<()> {
    let (paths, _settings, store) = super::open_store(cli)?;

    output::success(&format!(
        "Store ready with {} profile(s)",
        store.len()
    ));
    output::info(&format!("Data file: {}", paths.data_file.display()));
    output::info(&format!("Key file:  {}", paths.key_file.display()));
    output::tip("Keep the key file safe — without it the data file cannot be decrypted.");

    Ok(())
}
