//! Cryptographic primitives for rdvault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of the profile blob (`cipher`)
//! - Store key generation, persistence, and loading (`keys`)

pub mod cipher;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, get_or_create_key, StoreKey};
pub use cipher::{decrypt, encrypt};
pub use keys::{get_or_create_key, StoreKey};
