use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in rdvault.
#[derive(Debug, Error)]
pub enum RdVaultError {
    // --- Key errors ---
    #[error("Key file error: {0}")]
    KeyIo(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    // --- Store errors ---
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("No profile at index {index} (collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Backup file not found at {0}")]
    BackupNotFound(PathBuf),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Could not resolve a per-user data directory")]
    NoDataDir,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Connection launch failed: {0}")]
    LaunchFailed(String),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl RdVaultError {
    /// Build a `Validation` error for a named profile field.
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for rdvault results.
pub type Result<T> = std::result::Result<T, RdVaultError>;
