//! CLI adapter for bundlerig.
//!
//! Defines the argument parser, subcommands, and handlers; `main.rs` is
//! the composition root that wires them together.
#![deny(unused_crate_dependencies)]

// Dependencies used only by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
