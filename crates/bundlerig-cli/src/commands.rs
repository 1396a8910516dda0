//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the build descriptor tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the build descriptor and print it as JSON
    Emit {
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Write the descriptor to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Dev-server port used in the descriptor and success messages
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Resolve a package name to a concrete version via the manifest
    Resolve {
        /// Package name to resolve (e.g., "react")
        package: String,
    },

    /// List reachable dev-server addresses for this host
    Addresses {
        /// Port to include in the printed URLs
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Validate the manifest, environment tag, and descriptor wiring
    Check,
}
