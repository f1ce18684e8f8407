//! Configuration — per-user file locations and optional settings.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
