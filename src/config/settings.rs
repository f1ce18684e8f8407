use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RdVaultError, Result};

/// User-level configuration, loaded from `rdvault.toml` in the
/// application-data directory.
///
/// Every field has a sensible default so rdvault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The external remote-desktop client to launch for `connect`.
    #[serde(default = "default_rdp_client")]
    pub rdp_client: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_rdp_client() -> String {
    if cfg!(windows) {
        "mstsc".to_string()
    } else {
        "xfreerdp".to_string()
    }
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            rdp_client: default_rdp_client(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            RdVaultError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_pick_a_platform_client() {
        let s = Settings::default();
        if cfg!(windows) {
            assert_eq!(s.rdp_client, "mstsc");
        } else {
            assert_eq!(s.rdp_client, "xfreerdp");
        }
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&tmp.path().join("rdvault.toml")).unwrap();
        assert_eq!(settings.rdp_client, Settings::default().rdp_client);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rdvault.toml");
        fs::write(&path, "rdp_client = \"remmina\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.rdp_client, "remmina");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rdvault.toml");
        fs::write(&path, "\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.rdp_client, Settings::default().rdp_client);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rdvault.toml");
        fs::write(&path, "not valid {{toml").unwrap();

        let result = Settings::load(&path);
        assert!(result.is_err());
    }
}
