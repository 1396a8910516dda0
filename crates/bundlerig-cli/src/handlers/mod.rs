//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call bundlerig-core operations
//!   3. Format output for the terminal
//!
//! Handlers should not contain descriptor logic of their own; that lives
//! in `bundlerig-core`.

pub mod addresses;
pub mod check;
pub mod emit;
pub mod resolve;
