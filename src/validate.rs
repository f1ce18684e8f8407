//! Profile field validation.
//!
//! Runs before every `add`/`update`, never during load: a previously
//! saved collection is trusted as-is, even if it would no longer pass
//! these rules.

use std::net::IpAddr;

use crate::errors::{RdVaultError, Result};
use crate::store::Profile;

/// Validate a profile, returning the first failing rule.
///
/// Checks, in order, each short-circuiting:
/// 1. `name`, `address`, `username`, `password` are non-empty.
/// 2. `address` is a syntactically valid IPv4 or IPv6 literal.
///
/// No DNS resolution and no reachability check — syntax only.
/// Compressed IPv6 literals like `::1` are accepted.
pub fn validate(profile: &Profile) -> Result<()> {
    require_non_empty("name", &profile.name)?;
    require_non_empty("address", &profile.address)?;
    require_non_empty("username", &profile.username)?;
    require_non_empty("password", &profile.secret)?;

    if profile.address.parse::<IpAddr>().is_err() {
        return Err(RdVaultError::validation(
            "address",
            format!(
                "'{}' is not a valid IPv4 or IPv6 address",
                profile.address
            ),
        ));
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RdVaultError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new("office", "10.0.0.1", "admin", "hunter2")
    }

    fn failing_field(result: Result<()>) -> String {
        match result {
            Err(RdVaultError::Validation { field, .. }) => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_complete_ipv4_profile() {
        assert!(validate(&profile()).is_ok());
    }

    #[test]
    fn accepts_ipv6_literals() {
        let mut p = profile();
        p.address = "2001:db8::1".to_string();
        assert!(validate(&p).is_ok());

        p.address = "::1".to_string();
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn rejects_empty_name_first() {
        let mut p = profile();
        p.name.clear();
        assert_eq!(failing_field(validate(&p)), "name");
    }

    #[test]
    fn rejects_empty_password() {
        let mut p = profile();
        p.secret.clear();
        assert_eq!(failing_field(validate(&p)), "password");
    }

    #[test]
    fn empty_fields_are_reported_before_address_syntax() {
        // Both name and address are bad; the non-empty rule runs first.
        let mut p = profile();
        p.name.clear();
        p.address = "not-an-ip".to_string();
        assert_eq!(failing_field(validate(&p)), "name");
    }

    #[test]
    fn rejects_out_of_range_ipv4() {
        let mut p = profile();
        p.address = "999.999.1.1".to_string();
        assert_eq!(failing_field(validate(&p)), "address");
    }

    #[test]
    fn rejects_hostnames() {
        let mut p = profile();
        p.address = "server.example.com".to_string();
        assert_eq!(failing_field(validate(&p)), "address");
    }
}
