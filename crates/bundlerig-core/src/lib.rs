//! Core domain for bundlerig: dependency manifest resolution,
//! environment-gated configuration, and build descriptor assembly.
//!
//! Everything here is a pure or read-only computation executed once per
//! build invocation; the external bundler consuming the descriptor is an
//! opaque collaborator.
#![deny(unused_crate_dependencies)]

pub mod descriptor;
pub mod env;
pub mod error;
pub mod externals;
pub mod gate;
pub mod manifest;
pub mod netinfo;

// Re-export commonly used types for convenience
pub use descriptor::{
    BuildDescriptor, DEFAULT_DEV_PORT, DEFAULT_ENTRY, DevServer, HtmlMinify, OutputNaming,
    PluginEntry, assemble,
};
pub use env::{ENV_VAR, EnvTag};
pub use error::{DescriptorError, EnvTagError, ManifestError, NetInfoError};
pub use externals::{ExternalAsset, ExternalAssets};
pub use gate::Gate;
pub use manifest::DependencyManifest;
pub use netinfo::dev_addresses;
