//! Emit command handler.
//!
//! Assembles the full build descriptor and prints it (or writes it to a
//! file) as JSON for the external bundler.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use bundlerig_core::{DependencyManifest, EnvTag, Gate, assemble, dev_addresses};

use crate::error::CliError;

/// Execute the emit command.
///
/// Loads the manifest, enumerates host addresses, assembles the
/// descriptor for the active environment tag, and emits it as JSON.
pub fn execute(
    manifest_path: &Path,
    tag: EnvTag,
    port: u16,
    compact: bool,
    output: Option<&Path>,
) -> Result<()> {
    let manifest = DependencyManifest::load(manifest_path).map_err(CliError::from)?;
    let addresses = dev_addresses().map_err(CliError::from)?;
    debug!(%tag, port, "assembling build descriptor");

    let descriptor = assemble(&manifest, Gate::new(tag), &addresses, port)
        .map_err(CliError::from)?;
    let json = descriptor.to_json(compact).map_err(CliError::from)?;

    match output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| CliError::Io(e.to_string()))?;
            println!("Wrote {} descriptor to {}", tag, path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("package.json");
        fs::write(
            &path,
            r#"{"version": "1.0.3", "dependencies": {"react": "^16.13.1"}}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_emit_writes_descriptor_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifest(dir.path());
        let out = dir.path().join("descriptor.json");

        execute(&manifest, EnvTag::Production, 3000, true, Some(&out)).unwrap();

        let json = fs::read_to_string(&out).unwrap();
        assert!(json.contains(r#""mode":"production""#));
        assert!(json.contains("1.0.3"));
    }

    #[test]
    fn test_emit_missing_manifest_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(
            &dir.path().join("missing.json"),
            EnvTag::Development,
            3000,
            true,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Io(_))
        ));
    }
}
