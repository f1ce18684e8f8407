//! `rdvault edit` — modify the profile at a list position.

use crate::cli::{output, Cli};
use crate::errors::Result;
use crate::store::Profile;

/// Execute the `edit` command.
///
/// Text fields not given as flags are prompted for, pre-filled with
/// the current value.  The password prompt may be left empty to keep
/// the current password.
pub fn execute(
    cli: &Cli,
    position: usize,
    name: Option<&str>,
    address: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let (_paths, _settings, mut store) = super::open_store(cli)?;
    let index = super::position_to_index(position, &store)?;

    // Snapshot the current values; the index stays valid because
    // nothing mutates the collection until `update` below.
    let current = store.get(index)?.clone();

    let name = super::text_or_prompt(name, "Profile name", Some(&current.name))?;
    let address = super::text_or_prompt(address, "Address (IPv4/IPv6)", Some(&current.address))?;
    let username = super::text_or_prompt(username, "Username", Some(&current.username))?;

    let password = match password {
        Some(value) => value.to_string(),
        None => {
            let entered = prompt_optional_password()?;
            if entered.is_empty() {
                current.secret.clone()
            } else {
                entered
            }
        }
    };

    store.update(index, Profile::new(name.clone(), address, username, password))?;

    output::success(&format!("Updated profile '{name}'"));

    Ok(())
}

/// Prompt for a new password, allowing empty input to mean "keep the
/// current one".
fn prompt_optional_password() -> Result<String> {
    use dialoguer::Password;

    Password::new()
        .with_prompt("Password (leave empty to keep current)")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| crate::errors::RdVaultError::PromptFailed(e.to_string()))
}
