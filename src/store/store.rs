//! The encrypted profile store.
//!
//! `ProfileStore` owns the in-memory profile collection and the data
//! file holding its encrypted form.  Every mutation re-encrypts the
//! full collection and rewrites the file atomically — there is no
//! incremental diffing, and the file is never observable half-written
//! or in plaintext.
//!
//! The store assumes a single-threaded, single-process host: operations
//! run to completion before the next is invoked, which is what makes
//! index-based addressing in `update`/`delete` safe.  An index handle
//! is only valid until the next mutation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::cipher::{decrypt, encrypt};
use crate::crypto::keys::StoreKey;
use crate::errors::{RdVaultError, Result};
use crate::validate;

use super::profile::Profile;

/// Outcome of loading the data file into memory.
///
/// A decrypt or parse failure is deliberately downgraded to an empty
/// collection instead of an error: the UI stays usable and the
/// undecryptable ciphertext is left on disk untouched, so a future
/// correct key could still recover it.  `Recovered` makes that policy
/// visible to callers instead of hiding it behind a silent empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file decrypted and parsed cleanly.
    Loaded,
    /// The file could not be decrypted or parsed; starting empty.
    Recovered,
}

/// The main store handle.  Create one with `ProfileStore::open`, then
/// use its methods to manage profiles.
pub struct ProfileStore {
    /// Path to the encrypted data file on disk.
    path: PathBuf,

    /// The store key used for every encrypt/decrypt.
    key: StoreKey,

    /// In-memory profile collection, in insertion order.
    profiles: Vec<Profile>,
}

impl ProfileStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the store at `path`, initializing it on first run.
    ///
    /// If no data file exists yet, an encrypted empty collection is
    /// written before returning, so the file invariant (always a valid
    /// encrypted token) holds from the very first interaction.
    /// Otherwise the file is loaded; see `reload` for the recovery
    /// policy on undecryptable data.
    pub fn open(path: &Path, key: StoreKey) -> Result<(Self, LoadOutcome)> {
        let mut store = Self {
            path: path.to_path_buf(),
            key,
            profiles: Vec::new(),
        };

        if !store.path.exists() {
            store.save()?;
            return Ok((store, LoadOutcome::Loaded));
        }

        let outcome = store.reload()?;
        Ok((store, outcome))
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Re-read the data file into memory, replacing the current
    /// collection.
    ///
    /// Only an unreadable file is an error.  A file that fails to
    /// decrypt or parse yields `LoadOutcome::Recovered` with an empty
    /// collection; the file itself is not rewritten.
    pub fn reload(&mut self) -> Result<LoadOutcome> {
        let token = fs::read_to_string(&self.path)?;

        let plaintext = match decrypt(self.key.as_bytes(), &token) {
            Ok(bytes) => bytes,
            Err(_) => {
                self.profiles.clear();
                return Ok(LoadOutcome::Recovered);
            }
        };

        match serde_json::from_slice::<Vec<Profile>>(&plaintext) {
            Ok(profiles) => {
                self.profiles = profiles;
                Ok(LoadOutcome::Loaded)
            }
            Err(_) => {
                self.profiles.clear();
                Ok(LoadOutcome::Recovered)
            }
        }
    }

    /// Serialize, encrypt, and write the full collection to disk.
    ///
    /// The token is written to a temp file in the same directory and
    /// renamed over the target, so a crash between encrypt and write
    /// never leaves a half-written data file.
    pub fn save(&mut self) -> Result<()> {
        let plaintext = serde_json::to_vec(&self.profiles)
            .map_err(|e| RdVaultError::SerializationError(format!("profiles: {e}")))?;

        let token = encrypt(self.key.as_bytes(), &plaintext)?;

        write_atomic(&self.path, token.as_bytes())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Validate and append a profile, then persist.
    ///
    /// On validation failure neither the collection nor the file
    /// changes.  If the write fails, the in-memory append is rolled
    /// back so memory and disk stay consistent.
    pub fn add(&mut self, profile: Profile) -> Result<()> {
        validate::validate(&profile)?;

        self.profiles.push(profile);
        if let Err(e) = self.save() {
            self.profiles.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Validate and replace the profile at `index` in place, then
    /// persist.  Fails with `IndexOutOfRange` for a stale or invalid
    /// index.
    pub fn update(&mut self, index: usize, profile: Profile) -> Result<()> {
        self.check_index(index)?;
        validate::validate(&profile)?;

        let previous = std::mem::replace(&mut self.profiles[index], profile);
        if let Err(e) = self.save() {
            self.profiles[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Remove the profile at `index`, then persist.  Fails with
    /// `IndexOutOfRange` for a stale or invalid index.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;

        let removed = self.profiles.remove(index);
        if let Err(e) = self.save() {
            self.profiles.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Backup / restore
    // ------------------------------------------------------------------

    /// Copy the raw encrypted data file verbatim to `destination`.
    ///
    /// No re-encryption and no decryption happen: the backup is only
    /// restorable by a process holding the matching key file.
    pub fn backup(&self, destination: &Path) -> Result<()> {
        fs::copy(&self.path, destination)?;
        Ok(())
    }

    /// Copy the raw bytes of `source` over the data file and reload.
    ///
    /// The source is not authenticated until the reload attempts to
    /// decrypt it: a corrupt or foreign-keyed backup becomes
    /// `LoadOutcome::Recovered` with an empty collection rather than an
    /// error.  The overwrite itself is atomic, like `save`.
    pub fn restore(&mut self, source: &Path) -> Result<LoadOutcome> {
        if !source.exists() {
            return Err(RdVaultError::BackupNotFound(source.to_path_buf()));
        }

        let bytes = fs::read(source)?;
        write_atomic(&self.path, &bytes)?;

        self.reload()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The profiles in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The profile at `index`, or `IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&Profile> {
        self.check_index(index)?;
        Ok(&self.profiles[index])
    }

    /// Number of profiles in the collection.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the collection holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Path to the encrypted data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Internal
    // ------------------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.profiles.len() {
            return Err(RdVaultError::IndexOutOfRange {
                index,
                len: self.profiles.len(),
            });
        }
        Ok(())
    }
}

/// Write `bytes` to `path` atomically via a same-directory temp file
/// and rename, so readers never see a partial write.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
