//! Read-only sources of environment-like key/value state.
//!
//! Responsibilities:
//! - Define the `EnvSource` abstraction over a name -> value mapping.
//! - Provide `ProcessEnv` (the process environment) and `StaticEnv`
//!   (an in-memory mapping for isolated tests and embedders).
//! - Provide `var_or_none` for lookups with empty-value filtering.
//!
//! Does NOT handle:
//! - Fallback defaults or allowed-value validation (see require.rs).
//!
//! Invariants:
//! - Sources are never mutated through this interface.
//! - `var_or_none` reports an empty value as unset.
//! - Values are returned byte-for-byte; no trimming is performed.

use std::collections::HashMap;

/// A read-only view of a name -> value mapping.
///
/// `EnvVar::require` resolves against [`ProcessEnv`]; `EnvVar::require_from`
/// accepts any implementation, so tests and embedders can supply their own
/// state without mutating the process environment.
pub trait EnvSource {
    /// Look up `name`, returning the raw value if it is defined.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // A value that is not valid Unicode is indistinguishable from an
        // unset variable.
        std::env::var(name).ok()
    }
}

/// An in-memory source backed by a map.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Read a variable from `source`, returning None if unset or empty.
///
/// "Defined" means "non-empty" throughout this crate; an empty string and a
/// missing variable are treated identically.
pub fn var_or_none(source: &dyn EnvSource, name: &str) -> Option<String> {
    source.get(name).filter(|value| !value.is_empty())
}
