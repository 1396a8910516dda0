//! Core error types.
//!
//! Provides semantic errors for manifest loading, environment tag parsing,
//! interface enumeration, and descriptor assembly without exposing
//! adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dependency manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// The manifest file is not valid JSON of the expected shape.
    #[error("Failed to parse manifest {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },
}

/// Error raised for environment tags outside the recognized set.
///
/// The original configuration silently produced an undefined value for
/// unknown tags; here an unknown tag is a hard configuration error.
#[derive(Debug, Clone, Error)]
pub enum EnvTagError {
    #[error("Unrecognized environment tag '{0}' (expected 'development' or 'production')")]
    Unrecognized(String),
}

/// Errors from host network interface enumeration.
#[derive(Debug, Error)]
pub enum NetInfoError {
    /// The OS-level interface query failed.
    #[error("Network interface enumeration failed: {0}")]
    Enumeration(String),
}

/// Errors from descriptor assembly and validation.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Two external assets claimed the same module name.
    #[error("Duplicate external module '{0}'")]
    DuplicateExternal(String),

    /// The entry point is empty.
    #[error("Entry point cannot be empty")]
    EmptyEntry,

    /// The dev-server port is in the privileged range.
    #[error("Dev-server port should be >= 1024 (privileged ports require root), got {0}")]
    InvalidPort(u16),

    /// Descriptor serialization failed.
    #[error("Failed to serialize descriptor: {0}")]
    Serialize(String),
}
