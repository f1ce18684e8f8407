//! Store module — encrypted connection-profile storage.
//!
//! This module provides:
//! - The `Profile` record (`profile`)
//! - The `ProfileStore` owning the collection, its persistence, and
//!   backup/restore (`store`)

pub mod profile;
pub mod store;

// Re-export the most commonly used items.
pub use profile::Profile;
pub use store::{LoadOutcome, ProfileStore};
