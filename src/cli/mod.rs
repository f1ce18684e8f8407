//! Command-line interface definitions.
//!
//! The CLI is a plain caller of the store API: it owns no store logic,
//! converts its 1-based display positions into the store's 0-based
//! indices, and renders results.  `--data-dir` (or `RDVAULT_DATA_DIR`)
//! points every command at an alternate application-data directory,
//! which is how tests and scripts isolate their state.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rdvault",
    version,
    about = "Encrypted credential manager for remote desktop connections"
)]
pub struct Cli {
    /// Override the application-data directory holding the encrypted
    /// profile file and the key file.
    #[arg(long, global = true, env = "RDVAULT_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the key and an encrypted empty profile list
    Init,

    /// List stored profiles
    List,

    /// Add a new connection profile
    Add {
        /// Display name for the profile
        #[arg(long)]
        name: Option<String>,

        /// IPv4 or IPv6 address of the remote host
        #[arg(long)]
        address: Option<String>,

        /// Username for the remote session
        #[arg(long)]
        username: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Edit the profile at a list position
    Edit {
        /// Position from `rdvault list` (1-based)
        position: usize,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New address
        #[arg(long)]
        address: Option<String>,

        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete the profile at a list position
    Delete {
        /// Position from `rdvault list` (1-based)
        position: usize,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Launch the remote-desktop client for a stored profile
    Connect {
        /// Position from `rdvault list` (1-based)
        position: usize,
    },

    /// Copy the encrypted data file to a backup location
    Backup {
        /// Where to write the backup (content stays encrypted)
        destination: PathBuf,
    },

    /// Overwrite the data file from a backup and reload
    Restore {
        /// The backup file to restore from
        source: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}
