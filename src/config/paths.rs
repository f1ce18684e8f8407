//! Resolution of the per-user application-data directory.
//!
//! rdvault keeps exactly two files there:
//!
//! - `profiles.json` — the encrypted profile collection.  The `.json`
//!   extension is historical; the content is an opaque encrypted token,
//!   never plaintext JSON.
//! - `store.key` — the raw 32-byte store key.
//!
//! The key sits next to the data by design: this protects against
//! casual disclosure of the data file, not against an attacker who can
//! read the whole directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{RdVaultError, Result};

/// Name of the encrypted data file.
pub const DATA_FILE_NAME: &str = "profiles.json";

/// Name of the key file.
pub const KEY_FILE_NAME: &str = "store.key";

/// Name of the optional settings file.
pub const SETTINGS_FILE_NAME: &str = "rdvault.toml";

/// Resolved locations of the store's files.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// The application-data directory itself.
    pub dir: PathBuf,
    /// The encrypted data file.
    pub data_file: PathBuf,
    /// The key file.
    pub key_file: PathBuf,
    /// The optional settings file.
    pub settings_file: PathBuf,
}

impl AppPaths {
    /// Resolve the application directory, creating it if necessary.
    ///
    /// With no override this is `<platform data dir>/rdvault`
    /// (e.g. `~/.local/share/rdvault` on Linux, `%APPDATA%\rdvault` on
    /// Windows).  An override — from `--data-dir` or `RDVAULT_DATA_DIR`
    /// — is used verbatim, which is how tests isolate their state.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .ok_or(RdVaultError::NoDataDir)?
                .join("rdvault"),
        };

        fs::create_dir_all(&dir)?;

        Ok(Self {
            data_file: dir.join(DATA_FILE_NAME),
            key_file: dir.join(KEY_FILE_NAME),
            settings_file: dir.join(SETTINGS_FILE_NAME),
            dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_dir_is_used_verbatim() {
        let tmp = TempDir::new().unwrap();
        let paths = AppPaths::resolve(Some(tmp.path())).unwrap();

        assert_eq!(paths.dir, tmp.path());
        assert_eq!(paths.data_file, tmp.path().join("profiles.json"));
        assert_eq!(paths.key_file, tmp.path().join("store.key"));
    }

    #[test]
    fn resolve_creates_the_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("does").join("not").join("exist");

        AppPaths::resolve(Some(&nested)).unwrap();
        assert!(nested.is_dir());
    }
}
