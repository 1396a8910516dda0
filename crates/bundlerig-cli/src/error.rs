//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use bundlerig_core::{DescriptorError, EnvTagError, ManifestError, NetInfoError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (bad tag, malformed manifest, invalid descriptor).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host query error (interface enumeration).
    #[error("Host error: {0}")]
    Host(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Host(_) => 71,     // EX_OSERR
        }
    }
}

impl From<EnvTagError> for CliError {
    fn from(err: EnvTagError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::ReadFailed { .. } => Self::Io(err.to_string()),
            ManifestError::ParseFailed { .. } => Self::Config(err.to_string()),
        }
    }
}

impl From<DescriptorError> for CliError {
    fn from(err: DescriptorError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<NetInfoError> for CliError {
    fn from(err: NetInfoError) -> Self {
        Self::Host(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_sysexits() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Host("x".into()).exit_code(), 71);
    }

    #[test]
    fn test_env_tag_error_maps_to_config() {
        let err: CliError = "staging".parse::<bundlerig_core::EnvTag>().unwrap_err().into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }
}
