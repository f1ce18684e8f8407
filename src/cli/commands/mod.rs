//! One module per subcommand, plus shared helpers for opening the
//! store and prompting.

pub mod add;
pub mod backup;
pub mod connect;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod restore;

use dialoguer::{Input, Password};

use crate::cli::{output, Cli};
use crate::config::{AppPaths, Settings};
use crate::crypto;
use crate::errors::{RdVaultError, Result};
use crate::store::{LoadOutcome, ProfileStore};

/// Resolve paths, load settings, obtain the key, and open the store.
///
/// This is the startup sequence every command shares.  A key failure
/// aborts (there is nothing useful to do without the key); a recovered
/// load is only a warning — the session continues with an empty
/// collection and the undecodable ciphertext stays on disk.
pub(crate) fn open_store(cli: &Cli) -> Result<(AppPaths, Settings, ProfileStore)> {
    let paths = AppPaths::resolve(cli.data_dir.as_deref())?;
    let settings = Settings::load(&paths.settings_file)?;

    let key = crypto::get_or_create_key(&paths.key_file)?;
    let (store, outcome) = ProfileStore::open(&paths.data_file, key)?;

    if outcome == LoadOutcome::Recovered {
        output::warning("Stored profiles could not be decrypted; starting with an empty list.");
        output::tip("The data file was left untouched — a matching key can still recover it.");
    }

    Ok((paths, settings, store))
}

/// Convert a 1-based `list` position into a store index.
pub(crate) fn position_to_index(position: usize, store: &ProfileStore) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or(RdVaultError::IndexOutOfRange {
            index: 0,
            len: store.len(),
        })
}

/// Use the flag value if given, otherwise prompt interactively.
pub(crate) fn text_or_prompt(
    flag: Option<&str>,
    prompt: &str,
    initial: Option<&str>,
) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }

    input.interact_text().map_err(prompt_error)
}

/// Use the flag value if given, otherwise prompt without echo.
pub(crate) fn password_or_prompt(flag: Option<&str>, prompt: &str) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }

    Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(e: dialoguer::Error) -> RdVaultError {
    RdVaultError::PromptFailed(e.to_string())
}
