//! Error types for environment variable resolution.
//!
//! Responsibilities:
//! - Define error variants for the two resolution failures.
//! - Render diagnostics that name the variable, the offending value, and the
//!   allowed-values list.
//!
//! Does NOT handle:
//! - Resolution order or fallback policy (see require.rs).
//!
//! Invariants:
//! - All variants include the variable name for debugging.
//! - The allowed-values list renders as a JSON array.
//! - Errors are never recovered internally; they surface to the caller.

use thiserror::Error;

/// Errors that can occur while resolving an environment variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvVarError {
    /// The variable is unset or empty and no default was supplied.
    #[error("environment variable is not defined: {0}")]
    MissingVariable(String),

    /// The variable holds a value outside the allowed set and no default was
    /// available to substitute.
    #[error(
        "environment variable contains unexpected value\nenvironment variable: {name}\nactual value: {actual}\npossible values: {}",
        render_allowed(.allowed)
    )]
    UnexpectedValue {
        name: String,
        actual: String,
        allowed: Vec<String>,
    },
}

fn render_allowed(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| format!("{values:?}"))
}
