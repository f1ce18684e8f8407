pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod launch;
pub mod store;
pub mod validate;
