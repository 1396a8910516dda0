//! Check command handler.
//!
//! Dry-runs the full assembly and reports what the descriptor would
//! contain, failing with a configuration error on any invalid input.

use std::path::Path;

use anyhow::Result;

use bundlerig_core::{
    DEFAULT_DEV_PORT, DependencyManifest, EnvTag, Gate, assemble, dev_addresses,
};

use crate::error::CliError;

/// Execute the check command.
pub fn execute(manifest_path: &Path, tag: EnvTag) -> Result<()> {
    let manifest = DependencyManifest::load(manifest_path).map_err(CliError::from)?;
    let addresses = dev_addresses().map_err(CliError::from)?;

    let descriptor = assemble(&manifest, Gate::new(tag), &addresses, DEFAULT_DEV_PORT)
        .map_err(CliError::from)?;

    println!("manifest        = {}", manifest_path.display());
    println!("environment     = {}", descriptor.mode);
    println!("project version = {}", manifest.project_version());
    println!("externals       = {}", descriptor.externals.len());
    println!("dev addresses   = {}", addresses.join(", "));
    println!();
    println!("Configuration OK");

    Ok(())
}
