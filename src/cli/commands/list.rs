//! `rdvault list` — show stored profiles.

use crate::cli::{output, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_paths, _settings, store) = super::open_store(cli)?;

    output::print_profiles_table(store.profiles());

    Ok(())
}
