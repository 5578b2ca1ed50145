//! Environment variable resolution with fallback and validation.
//!
//! Responsibilities:
//! - Hold a single access request (name, optional default, allowed values).
//! - Resolve the request against an `EnvSource` in a fixed precedence order.
//!
//! Does NOT handle:
//! - Source lookup details (see source.rs).
//! - Parsing values into richer types; resolution yields strings only.
//!
//! Invariants:
//! - Resolution is read-only; the source is never mutated.
//! - A resolved value is always a non-empty string.
//! - When `allowed_values` is non-empty, the resolved value is a member of
//!   it, unless an unmatched default was substituted for a rejected value.
//! - An empty default and an empty allowed-values list behave as if they were
//!   never supplied.

use crate::error::EnvVarError;
use crate::source::{EnvSource, ProcessEnv, var_or_none};

/// A single environment variable access request.
///
/// Built up in the usual builder style and resolved with [`EnvVar::require`]
/// (process environment) or [`EnvVar::require_from`] (any [`EnvSource`]):
///
/// ```
/// use require_env::{EnvVar, StaticEnv};
///
/// let env = StaticEnv::new();
/// let mode = EnvVar::new("APP_MODE").with_default("dev").require_from(&env)?;
/// assert_eq!(mode, "dev");
/// # Ok::<(), require_env::EnvVarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnvVar {
    name: String,
    default: Option<String>,
    allowed_values: Vec<String>,
}

impl EnvVar {
    /// Create a request for `name` with no default and no restriction.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            allowed_values: Vec::new(),
        }
    }

    /// Set the fallback used when the variable is unset, empty, or holds a
    /// value outside the allowed set.
    ///
    /// An empty default is ignored, mirroring the treatment of empty
    /// environment values; this keeps resolved values non-empty.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict the values the variable may hold. An empty list places no
    /// restriction.
    ///
    /// A resolved value is guaranteed to be a member of this list, except
    /// when a default is substituted for a rejected value: the default itself
    /// is not checked for membership.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// The requested variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve against the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::MissingVariable`] if the variable is unset or
    /// empty and no default was supplied, and [`EnvVarError::UnexpectedValue`]
    /// if the value is outside the allowed set and no default was supplied.
    pub fn require(&self) -> Result<String, EnvVarError> {
        self.require_from(&ProcessEnv)
    }

    /// Resolve against `source`.
    ///
    /// Resolution order:
    /// 1. A non-empty value that passes the allowed-values check (or faces no
    ///    check) is returned as-is.
    /// 2. A non-empty value outside the allowed set is replaced by the
    ///    default when one is set; otherwise resolution fails.
    /// 3. An unset or empty variable resolves to the default when one is set;
    ///    otherwise resolution fails. The default is not checked against the
    ///    allowed set in this branch.
    ///
    /// # Errors
    ///
    /// Same as [`EnvVar::require`].
    pub fn require_from(&self, source: &dyn EnvSource) -> Result<String, EnvVarError> {
        let Some(value) = var_or_none(source, &self.name) else {
            return match self.default() {
                Some(default) => {
                    tracing::debug!(
                        name = %self.name,
                        default = %default,
                        "environment variable unset, using default"
                    );
                    Ok(default.to_string())
                }
                None => Err(EnvVarError::MissingVariable(self.name.clone())),
            };
        };

        if self.allowed_values.is_empty() || self.allowed_values.contains(&value) {
            return Ok(value);
        }

        match self.default() {
            Some(default) => {
                tracing::warn!(
                    name = %self.name,
                    actual = %value,
                    default = %default,
                    "environment variable holds unexpected value, using default"
                );
                Ok(default.to_string())
            }
            None => Err(EnvVarError::UnexpectedValue {
                name: self.name.clone(),
                actual: value,
                allowed: self.allowed_values.clone(),
            }),
        }
    }

    // The default participates in resolution only when non-empty.
    fn default(&self) -> Option<&str> {
        self.default.as_deref().filter(|value| !value.is_empty())
    }
}

/// Require `name` from the process environment, with no fallback and no
/// restriction.
///
/// # Errors
///
/// Returns [`EnvVarError::MissingVariable`] if the variable is unset or empty.
pub fn require_env_var(name: &str) -> Result<String, EnvVarError> {
    EnvVar::new(name).require()
}
