//! AES-256-GCM authenticated encryption of the profile blob.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce,
//! prepends it to the ciphertext, and base64-encodes the whole buffer
//! so the data file holds a single UTF-8-safe token.  `decrypt` reverses
//! the encoding and splits the nonce back out before decrypting.
//!
//! Layout of the token (before base64):
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{RdVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns a base64 token of the nonce prepended to the ciphertext.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<String> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| RdVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| RdVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one token.
    let mut buf = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    buf.extend_from_slice(&nonce);
    buf.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(buf))
}

/// Decrypt a token that was produced by `encrypt`.
///
/// Fails with `DecryptionFailed` on malformed base64, a truncated
/// buffer, a tampered ciphertext, or a wrong key — never garbage.
pub fn decrypt(key: &[u8], token: &str) -> Result<Vec<u8>> {
    let data = BASE64
        .decode(token.trim())
        .map_err(|_| RdVaultError::DecryptionFailed)?;

    // Make sure we have at least a nonce worth of bytes.
    if data.len() < NONCE_LEN {
        return Err(RdVaultError::DecryptionFailed);
    }

    // Split nonce from ciphertext.
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| RdVaultError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| RdVaultError::DecryptionFailed)?;

    Ok(plaintext)
}
