//! The connection profile record stored in the vault.
//!
//! Field names on the wire match the historical JSON shape of the data
//! file (`name` / `ip` / `username` / `password`), so existing vaults
//! decrypt into the same records.  In memory the password lives in
//! plaintext for the lifetime of the process; the whole record is
//! zeroized on drop.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One stored remote-desktop credential set.
///
/// `name` is a free-form label and is not required to be unique.
/// Identity within the collection is positional: callers address a
/// profile by its current index, which is only valid until the next
/// mutation of the collection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Profile {
    /// Display label shown in listings.
    pub name: String,

    /// IPv4 or IPv6 literal of the remote host.
    #[serde(rename = "ip")]
    pub address: String,

    /// Account name used for the remote session.
    pub username: String,

    /// The account password.  Never persisted unencrypted.
    #[serde(rename = "password")]
    pub secret: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }
}

// The password never appears in Debug output, so error messages and
// logs cannot leak it.
impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_wire_field_names() {
        let profile = Profile::new("office", "10.0.0.1", "admin", "hunter2");
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["name"], "office");
        assert_eq!(json["ip"], "10.0.0.1");
        assert_eq!(json["username"], "admin");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn deserializes_from_the_wire_field_names() {
        let json = r#"{"name":"office","ip":"10.0.0.1","username":"admin","password":"hunter2"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.address, "10.0.0.1");
        assert_eq!(profile.secret, "hunter2");
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let profile = Profile::new("office", "10.0.0.1", "admin", "hunter2");
        let debug = format!("{profile:?}");
        assert!(!debug.contains("hunter2"));
    }
}
