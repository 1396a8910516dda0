//! External assets served from a CDN instead of compiled into the bundle.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::DescriptorError;
use crate::manifest::DependencyManifest;

/// `babel-standalone` is not in the fallback table of known project
/// dependencies, so the catalog pins its CDN version here.
const BABEL_STANDALONE_VERSION: &str = "6.26.0";

/// A third-party package loaded from a remote URL into a named global
/// binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalAsset {
    /// Module name as it appears in import statements.
    pub module: String,
    /// CDN entry URL (protocol-relative).
    pub entry: String,
    /// Global binding the CDN script installs.
    pub global: String,
}

/// The active set of external assets.
///
/// Module names are unique within the set; a duplicate registration is
/// rejected rather than silently shadowing an earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExternalAssets {
    assets: Vec<ExternalAsset>,
}

impl ExternalAssets {
    /// The catalog used by the standard descriptor, with CDN URLs carrying
    /// versions resolved from the manifest.
    #[must_use]
    pub fn standard_catalog(manifest: &DependencyManifest) -> Self {
        let react = manifest.resolve("react");
        let react_dom = manifest.resolve("react-dom");
        let router = manifest.resolve("react-router-dom");
        let babel = match manifest.resolve("babel-standalone") {
            v if v.is_empty() => BABEL_STANDALONE_VERSION.to_string(),
            v => v,
        };

        Self {
            assets: vec![
                ExternalAsset {
                    module: "react".to_string(),
                    entry: format!("//cdn.bootcss.com/react/{react}/umd/react.production.min.js"),
                    global: "React".to_string(),
                },
                ExternalAsset {
                    module: "react-dom".to_string(),
                    entry: format!(
                        "//cdn.bootcss.com/react-dom/{react_dom}/umd/react-dom.production.min.js"
                    ),
                    global: "ReactDOM".to_string(),
                },
                ExternalAsset {
                    module: "react-router-dom".to_string(),
                    entry: format!(
                        "//cdn.bootcdn.net/ajax/libs/react-router-dom/{router}/react-router-dom.min.js"
                    ),
                    global: "ReactRouterDOM".to_string(),
                },
                ExternalAsset {
                    module: "babel-standalone".to_string(),
                    entry: format!("//cdn.bootcdn.net/ajax/libs/babel-standalone/{babel}/babel.min.js"),
                    global: "Babel".to_string(),
                },
            ],
        }
    }

    /// Add an asset, rejecting duplicate module names.
    pub fn insert(&mut self, asset: ExternalAsset) -> Result<(), DescriptorError> {
        if self.assets.iter().any(|a| a.module == asset.module) {
            return Err(DescriptorError::DuplicateExternal(asset.module));
        }
        self.assets.push(asset);
        Ok(())
    }

    /// The assets in registration order.
    #[must_use]
    pub fn assets(&self) -> &[ExternalAsset] {
        &self.assets
    }

    /// Module name to global binding, as consumed by the bundler's
    /// `externals` field.
    #[must_use]
    pub fn global_map(&self) -> BTreeMap<String, String> {
        self.assets
            .iter()
            .map(|a| (a.module.clone(), a.global.clone()))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }
}
