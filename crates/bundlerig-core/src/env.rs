//! Environment tags.
//!
//! Exactly one tag is active per build invocation. The active tag is
//! injected explicitly wherever it is needed (see [`crate::gate::Gate`]);
//! this module never reads ambient process state, which keeps the gate
//! pure and testable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvTagError;

/// Environment variable consulted by adapters to pick the active tag.
pub const ENV_VAR: &str = "BUNDLERIG_ENV";

/// The environment a descriptor is assembled for.
///
/// Defaults to `Development` when no tag is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvTag {
    #[default]
    Development,
    Production,
}

impl EnvTag {
    /// The canonical string form, as it appears in the descriptor's `mode`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for EnvTag {
    type Err = EnvTagError;

    /// Parse a tag string, failing fast on anything outside the two
    /// recognized tags rather than propagating an undefined value into
    /// the descriptor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(EnvTagError::Unrecognized(other.to_string())),
        }
    }
}

impl fmt::Display for EnvTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_tags() {
        assert_eq!("development".parse::<EnvTag>().unwrap(), EnvTag::Development);
        assert_eq!("production".parse::<EnvTag>().unwrap(), EnvTag::Production);
    }

    #[test]
    fn test_parse_unrecognized_tag_fails() {
        let err = "staging".parse::<EnvTag>().unwrap_err();
        assert!(matches!(err, EnvTagError::Unrecognized(ref tag) if tag == "staging"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // "Production" is not a recognized tag; only the exact lowercase
        // forms select a branch.
        assert!("Production".parse::<EnvTag>().is_err());
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(EnvTag::default(), EnvTag::Development);
    }

    #[test]
    fn test_display_round_trips() {
        for tag in [EnvTag::Development, EnvTag::Production] {
            assert_eq!(tag.to_string().parse::<EnvTag>().unwrap(), tag);
        }
    }
}
