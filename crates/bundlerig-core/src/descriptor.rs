//! Build descriptor assembly.
//!
//! This is the composition point: the manifest, the environment gate, the
//! external-asset catalog, and the host address list are wired into one
//! declarative descriptor consumed by the external bundler. Everything is
//! constructed once per invocation and immutable afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::env::EnvTag;
use crate::error::DescriptorError;
use crate::externals::ExternalAssets;
use crate::gate::Gate;
use crate::manifest::DependencyManifest;

/// Default dev-server port.
pub const DEFAULT_DEV_PORT: u16 = 3000;

/// Default bundle entry point.
pub const DEFAULT_ENTRY: &str = "./src/index";

/// HTML minification options, all off by default.
///
/// The production build turns the aggressive set on; the development
/// build keeps the structurally identical all-off default so the
/// consuming template never sees a shape change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinify {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_empty_attributes: bool,
    pub remove_attribute_quotes: bool,
    pub remove_redundant_attributes: bool,
    pub remove_script_type_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    pub use_short_doctype: bool,
    // The consuming template spells these with uppercase acronyms
    #[serde(rename = "minifyCSS")]
    pub minify_css: bool,
    #[serde(rename = "minifyURLs")]
    pub minify_urls: bool,
}

impl HtmlMinify {
    /// The aggressive production profile.
    #[must_use]
    pub const fn aggressive() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_empty_attributes: true,
            remove_attribute_quotes: true,
            remove_redundant_attributes: true,
            remove_script_type_attributes: true,
            remove_style_link_type_attributes: true,
            use_short_doctype: true,
            minify_css: true,
            minify_urls: true,
        }
    }
}

/// Output filename patterns, carrying the project version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputNaming {
    pub chunk_filename: String,
    pub css_filename: String,
}

impl OutputNaming {
    fn for_version(version: &str) -> Self {
        Self {
            chunk_filename: format!("js/[name].[hash:5].{version}.js"),
            css_filename: format!("css/[name].[hash:5].{version}.css"),
        }
    }
}

/// Dev-server block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServer {
    pub host: String,
    pub port: u16,
    pub compress: bool,
    pub hot: bool,
    pub open: bool,
    pub overlay: bool,
}

impl DevServer {
    fn on_port(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
            compress: true,
            hot: true,
            open: false,
            overlay: true,
        }
    }
}

/// One plugin slot in the descriptor.
///
/// A gated-out slot is emitted as `Noop` rather than dropped, mirroring
/// the inert stand-in the consuming toolchain expects in that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginEntry {
    /// Inject CDN externals into the HTML template (production only).
    HtmlExternals { externals: ExternalAssets },
    /// Developer-facing success messages with reachable dev-server URLs.
    FriendlyErrors {
        messages: Vec<String>,
        notes: Vec<String>,
    },
    /// Inert placeholder for a gated-out slot.
    Noop,
}

/// The declarative descriptor handed to the external bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    pub mode: EnvTag,
    pub entry: String,
    pub output: OutputNaming,
    pub resolve_extensions: Vec<String>,
    pub externals: BTreeMap<String, String>,
    pub html_minify: HtmlMinify,
    pub dev_server: DevServer,
    pub plugins: Vec<PluginEntry>,
}

impl BuildDescriptor {
    /// Serialize to JSON for the consuming toolchain.
    pub fn to_json(&self, compact: bool) -> Result<String, DescriptorError> {
        let result = if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        result.map_err(|e| DescriptorError::Serialize(e.to_string()))
    }

    /// Check field wiring invariants.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.entry.trim().is_empty() {
            return Err(DescriptorError::EmptyEntry);
        }
        if self.dev_server.port < 1024 {
            return Err(DescriptorError::InvalidPort(self.dev_server.port));
        }
        Ok(())
    }
}

/// Assemble the standard descriptor.
///
/// `addresses` is the host address list from [`crate::netinfo`], injected
/// by the caller so assembly itself stays a pure function of its inputs.
pub fn assemble(
    manifest: &DependencyManifest,
    gate: Gate,
    addresses: &[String],
    port: u16,
) -> Result<BuildDescriptor, DescriptorError> {
    let catalog = ExternalAssets::standard_catalog(manifest);

    let externals_plugin = gate
        .select(
            EnvTag::Production,
            PluginEntry::HtmlExternals {
                externals: catalog.clone(),
            },
        )
        .unwrap_or(PluginEntry::Noop);

    let messages = addresses
        .iter()
        .map(|addr| format!("> http://{addr}:{port}"))
        .collect();
    let notes = vec![format!(
        "Compiled the {} configuration successfully",
        gate.active()
    )];

    let descriptor = BuildDescriptor {
        mode: gate.active(),
        entry: DEFAULT_ENTRY.to_string(),
        output: OutputNaming::for_version(manifest.project_version()),
        resolve_extensions: [".tsx", ".ts", ".jsx", ".js"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        externals: catalog.global_map(),
        html_minify: gate.value(EnvTag::Production, HtmlMinify::aggressive()),
        dev_server: DevServer::on_port(port),
        plugins: vec![
            externals_plugin,
            PluginEntry::FriendlyErrors { messages, notes },
        ],
    };

    descriptor.validate()?;
    Ok(descriptor)
}
