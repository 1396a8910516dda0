//! Resolve command handler.
//!
//! Resolves a package name to the concrete version the CDN entry URLs
//! would carry.

use std::path::Path;

use anyhow::Result;

use bundlerig_core::DependencyManifest;

use crate::error::CliError;

/// Execute the resolve command.
///
/// Prints the resolved version for `package`, noting whether it came from
/// the manifest or the fallback table.
pub fn execute(manifest_path: &Path, package: &str) -> Result<()> {
    let manifest = DependencyManifest::load(manifest_path).map_err(CliError::from)?;

    let version = manifest.resolve(package);
    if version.is_empty() {
        println!("{package}: no declared version and no known fallback");
    } else if manifest.declares(package) {
        println!("{package} {version} (from manifest)");
    } else {
        println!("{package} {version} (fallback)");
    }

    Ok(())
}
