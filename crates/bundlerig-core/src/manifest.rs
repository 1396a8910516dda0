//! Dependency manifest loading and version resolution.
//!
//! The manifest is the project descriptor's declared mapping of package
//! names to version ranges. It is loaded once per invocation and is
//! immutable afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ManifestError;

/// Fallback versions for packages the manifest does not declare.
///
/// These pin the CDN entry URLs for the external-asset catalog when the
/// project descriptor is silent about a package.
const FALLBACK_VERSIONS: &[(&str, &str)] = &[
    ("react", "16.13.1"),
    ("react-dom", "16.13.1"),
    ("react-router-dom", "5.2.0"),
];

/// Declared dependency ranges from the project descriptor.
///
/// Only the fields the assembler consumes are modeled; the rest of the
/// descriptor passes through untouched to the external toolchain.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DependencyManifest {
    /// The project's own version, embedded in output filename patterns.
    version: Option<String>,

    /// Package name to declared version range (`^1.2.3`, `~1.2.3`, `1.2.3`).
    dependencies: BTreeMap<String, String>,
}

impl DependencyManifest {
    /// Load and parse a JSON project descriptor from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let manifest: Self =
            serde_json::from_str(&raw).map_err(|e| ManifestError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            dependencies = manifest.dependencies.len(),
            "loaded dependency manifest"
        );
        Ok(manifest)
    }

    /// Build a manifest from already-parsed parts (tests, embedding).
    #[must_use]
    pub fn from_parts(
        version: Option<String>,
        dependencies: BTreeMap<String, String>,
    ) -> Self {
        Self {
            version,
            dependencies,
        }
    }

    /// The project version, or `0.0.0` when the descriptor omits it.
    #[must_use]
    pub fn project_version(&self) -> &str {
        self.version.as_deref().unwrap_or("0.0.0")
    }

    /// Resolve a package name to a concrete version string.
    ///
    /// - A declared range with a `^` or `~` prefix has exactly that one
    ///   leading character stripped.
    /// - A declared bare version (no recognized prefix) is returned
    ///   verbatim. The original configuration fell through to the
    ///   fallback table here; that is treated as a defect and the
    ///   declared value wins.
    /// - An undeclared package resolves through [`FALLBACK_VERSIONS`],
    ///   and to the empty string when unknown there too.
    ///
    /// Never fails: the result only feeds CDN URL construction, so
    /// degradation is silent by design of the error policy.
    #[must_use]
    pub fn resolve(&self, package: &str) -> String {
        if let Some(range) = self.dependencies.get(package) {
            if let Some(stripped) = range.strip_prefix(['^', '~']) {
                return stripped.to_string();
            }
            return range.clone();
        }

        FALLBACK_VERSIONS
            .iter()
            .find(|(name, _)| *name == package)
            .map(|(_, version)| (*version).to_string())
            .unwrap_or_default()
    }

    /// Whether the manifest declares the given package.
    #[must_use]
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manifest_with(entries: &[(&str, &str)]) -> DependencyManifest {
        let dependencies = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        DependencyManifest::from_parts(Some("1.4.2".to_string()), dependencies)
    }

    #[test]
    fn test_resolve_strips_caret_prefix() {
        let manifest = manifest_with(&[("react", "^16.13.1")]);
        assert_eq!(manifest.resolve("react"), "16.13.1");
    }

    #[test]
    fn test_resolve_strips_tilde_prefix() {
        let manifest = manifest_with(&[("react-router-dom", "~5.2.0")]);
        assert_eq!(manifest.resolve("react-router-dom"), "5.2.0");
    }

    #[test]
    fn test_resolve_strips_exactly_one_character() {
        // A doubled prefix is malformed input; only the first character
        // is removed.
        let manifest = manifest_with(&[("react", "^^16.13.1")]);
        assert_eq!(manifest.resolve("react"), "^16.13.1");
    }

    #[test]
    fn test_resolve_returns_bare_version_verbatim() {
        let manifest = manifest_with(&[("react", "16.8.0")]);
        assert_eq!(manifest.resolve("react"), "16.8.0");
    }

    #[test]
    fn test_resolve_falls_back_for_undeclared_known_packages() {
        let manifest = DependencyManifest::default();
        assert_eq!(manifest.resolve("react"), "16.13.1");
        assert_eq!(manifest.resolve("react-dom"), "16.13.1");
        assert_eq!(manifest.resolve("react-router-dom"), "5.2.0");
    }

    #[test]
    fn test_resolve_unknown_package_is_empty() {
        let manifest = DependencyManifest::default();
        assert_eq!(manifest.resolve("left-pad"), "");
    }

    #[test]
    fn test_project_version_default() {
        let manifest = DependencyManifest::default();
        assert_eq!(manifest.project_version(), "0.0.0");

        let manifest = manifest_with(&[]);
        assert_eq!(manifest.project_version(), "1.4.2");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "playground",
                "version": "2.0.0",
                "dependencies": {{
                    "react": "^16.13.1",
                    "react-dom": "^16.13.1"
                }},
                "devDependencies": {{ "webpack": "^4.43.0" }}
            }}"#
        )
        .unwrap();

        let manifest = DependencyManifest::load(file.path()).unwrap();
        assert_eq!(manifest.project_version(), "2.0.0");
        assert_eq!(manifest.resolve("react"), "16.13.1");
        assert!(manifest.declares("react-dom"));
        // devDependencies are not part of the resolution surface
        assert!(!manifest.declares("webpack"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = DependencyManifest::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ManifestError::ReadFailed { .. }));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = DependencyManifest::load(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::ParseFailed { .. }));
    }
}
