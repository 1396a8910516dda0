//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the build descriptor tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "bundlerig")]
#[command(about = "Assemble environment-gated build descriptors for the bundler")]
#[command(version)]
pub struct Cli {
    /// Active environment tag (development | production)
    #[arg(long = "env", global = true, env = bundlerig_core::ENV_VAR)]
    pub env: Option<String>,

    /// Path to the project dependency manifest
    #[arg(
        long = "manifest",
        global = true,
        default_value = "package.json"
    )]
    pub manifest: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
