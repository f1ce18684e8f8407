//! `rdvault add` — store a new connection profile.

use crate::cli::{output, Cli};
use crate::errors::Result;
use crate::store::Profile;

/// Execute the `add` command.
///
/// Fields not given as flags are prompted for.  Validation happens in
/// the store before anything is persisted.
pub fn execute(
    cli: &Cli,
    name: Option<&str>,
    address: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let (_paths, _settings, mut store) = super::open_store(cli)?;

    let name = super::text_or_prompt(name, "Profile name", None)?;
    let address = super::text_or_prompt(address, "Address (IPv4/IPv6)", None)?;
    let username = super::text_or_prompt(username, "Username", None)?;
    let password = super::password_or_prompt(password, "Password")?;

    store.add(Profile::new(name.clone(), address, username, password))?;

    output::success(&format!("Added profile '{name}'"));

    Ok(())
}
