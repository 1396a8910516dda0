//! Environment-conditional selection.
//!
//! A [`Gate`] holds the single active environment tag and hands a payload
//! through only when the caller's target tag matches it. The original
//! configuration selected the neutral default via a boolean shape flag;
//! here the two shapes are distinct named operations: [`Gate::value`]
//! substitutes `T::default()` on a mismatch, [`Gate::select`] returns a
//! tagged result so callers can emit their own inert stand-in (e.g. a
//! no-op plugin entry).

use crate::env::EnvTag;

/// Conditional selector bound to the active environment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    active: EnvTag,
}

impl Gate {
    /// Create a gate for the given active tag.
    #[must_use]
    pub const fn new(active: EnvTag) -> Self {
        Self { active }
    }

    /// The tag this gate was constructed with.
    #[must_use]
    pub const fn active(self) -> EnvTag {
        self.active
    }

    /// Return `payload` when `target` matches the active tag.
    ///
    /// Callers that need a shaped stand-in on a mismatch build it from the
    /// `None` arm themselves; see [`Gate::value`] for the common case.
    pub fn select<T>(self, target: EnvTag, payload: T) -> Option<T> {
        (target == self.active).then_some(payload)
    }

    /// Return `payload` when `target` matches the active tag, otherwise
    /// the type's default value.
    ///
    /// The default is structurally compatible with the payload by
    /// construction, so downstream composition never sees a shape change.
    pub fn value<T: Default>(self, target: EnvTag, payload: T) -> T {
        self.select(target, payload).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_matching_tag_is_identity() {
        let gate = Gate::new(EnvTag::Production);
        let payload: BTreeMap<&str, bool> = [("minify_css", true)].into_iter().collect();
        assert_eq!(
            gate.value(EnvTag::Production, payload.clone()),
            payload
        );
    }

    #[test]
    fn test_mismatched_tag_yields_default() {
        let gate = Gate::new(EnvTag::Development);
        let payload: BTreeMap<&str, bool> = [("minify_css", true)].into_iter().collect();
        assert_eq!(gate.value(EnvTag::Production, payload), BTreeMap::new());
    }

    #[test]
    fn test_select_tags_suppression() {
        let gate = Gate::new(EnvTag::Development);
        assert_eq!(gate.select(EnvTag::Development, 7), Some(7));
        assert_eq!(gate.select(EnvTag::Production, 7), None);
    }

    #[test]
    fn test_gate_is_pure() {
        // Same inputs, same output; the gate carries no other state.
        let gate = Gate::new(EnvTag::Production);
        assert_eq!(
            gate.select(EnvTag::Production, "a"),
            gate.select(EnvTag::Production, "a")
        );
        assert_eq!(gate.active(), EnvTag::Production);
    }
}
