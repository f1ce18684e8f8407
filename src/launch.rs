//! Launching the external remote-desktop client.
//!
//! The store itself performs no network I/O: given a decrypted profile,
//! this module hands `{address, username, secret}` to an external
//! client process.  On Windows the credentials are registered with
//! `cmdkey` first so `mstsc` can pick them up; elsewhere they are
//! passed as FreeRDP-style arguments.  Arguments go straight to the
//! process — no shell is involved.

use std::process::Command;

use crate::errors::{RdVaultError, Result};
use crate::store::Profile;

/// Launch the configured remote-desktop client for `profile`.
///
/// The client process is spawned detached; this returns as soon as the
/// launch itself succeeded.
pub fn launch(profile: &Profile, client: &str) -> Result<()> {
    #[cfg(windows)]
    store_windows_credential(profile)?;

    Command::new(client)
        .args(client_args(profile))
        .spawn()
        .map_err(|e| RdVaultError::LaunchFailed(format!("could not start {client}: {e}")))?;

    Ok(())
}

/// Register the profile's credentials with the Windows credential
/// store so `mstsc` does not prompt for them.
#[cfg(windows)]
fn store_windows_credential(profile: &Profile) -> Result<()> {
    let status = Command::new("cmdkey")
        .arg(format!("/generic:{}", profile.address))
        .arg(format!("/user:{}", profile.username))
        .arg(format!("/pass:{}", profile.secret))
        .status()
        .map_err(|e| RdVaultError::LaunchFailed(format!("could not run cmdkey: {e}")))?;

    if !status.success() {
        return Err(RdVaultError::LaunchFailed(format!(
            "cmdkey exited with {status}"
        )));
    }

    Ok(())
}

/// Arguments passed to the client binary.
///
/// `mstsc` reads credentials from the Windows credential store, so it
/// only needs the target.  Other clients take them on the command line
/// in FreeRDP syntax.
fn client_args(profile: &Profile) -> Vec<String> {
    if cfg!(windows) {
        vec![format!("/v:{}", profile.address)]
    } else {
        vec![
            format!("/v:{}", profile.address),
            format!("/u:{}", profile.username),
            format!("/p:{}", profile.secret),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new("office", "10.0.0.1", "admin", "hunter2")
    }

    #[test]
    fn args_always_target_the_address() {
        let args = client_args(&profile());
        assert_eq!(args[0], "/v:10.0.0.1");
    }

    #[cfg(not(windows))]
    #[test]
    fn unix_args_carry_credentials() {
        let args = client_args(&profile());
        assert_eq!(args, vec!["/v:10.0.0.1", "/u:admin", "/p:hunter2"]);
    }

    #[cfg(windows)]
    #[test]
    fn windows_args_omit_credentials() {
        // Credentials go through cmdkey, not the mstsc command line.
        let args = client_args(&profile());
        assert_eq!(args, vec!["/v:10.0.0.1"]);
    }
}
