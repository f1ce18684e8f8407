//! Store key lifecycle.
//!
//! The store key is a 32-byte random file generated once on first run
//! and loaded on every start after that.  It is never rotated and never
//! regenerated while present — losing the key file permanently strands
//! any previously encrypted data.

use std::fs;
use std::path::Path;

use rand::RngCore;
use zeroize::Zeroize;

use crate::errors::{RdVaultError, Result};

/// Expected length of the key file in bytes (256 bits).
const KEY_LEN: usize = 32;

/// A wrapper around the 32-byte store key that zeroes its memory when
/// dropped, so key material cannot linger after it is no longer needed.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct StoreKey {
    bytes: [u8; KEY_LEN],
}

impl StoreKey {
    /// Create a new `StoreKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Load the key file at `path`, or generate and persist one if absent.
///
/// On first run this creates the parent directory, writes 32 random
/// bytes, and restricts the file to owner-only access on Unix.  Any
/// read or write failure is `KeyIo` — fatal to startup, since without
/// the key the encrypted store is unusable.
pub fn get_or_create_key(path: &Path) -> Result<StoreKey> {
    if path.exists() {
        return load_key(path);
    }

    // Generate 32 cryptographically random bytes.
    let mut bytes = [0u8; KEY_LEN];
    rand::rngs::OsRng.fill_bytes(&mut bytes);

    // Ensure the parent directory exists.
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                RdVaultError::KeyIo(format!("cannot create key directory: {e}"))
            })?;
        }
    }

    fs::write(path, bytes)
        .map_err(|e| RdVaultError::KeyIo(format!("failed to write key file: {e}")))?;

    // On Unix, restrict permissions to owner-only read/write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| {
            RdVaultError::KeyIo(format!("failed to set key file permissions: {e}"))
        })?;
    }

    Ok(StoreKey::new(bytes))
}

/// Load an existing key file and validate its length.
fn load_key(path: &Path) -> Result<StoreKey> {
    let mut data = fs::read(path)
        .map_err(|e| RdVaultError::KeyIo(format!("failed to read key file: {e}")))?;

    if data.len() != KEY_LEN {
        let got = data.len();
        data.zeroize();
        return Err(RdVaultError::KeyIo(format!(
            "key file must be exactly {KEY_LEN} bytes, got {got}"
        )));
    }

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&data);
    data.zeroize();

    Ok(StoreKey::new(bytes))
}
