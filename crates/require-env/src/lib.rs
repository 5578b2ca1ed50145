//! Validated access to environment variables.
//!
//! This crate provides a single configuration accessor: look up a named
//! variable in the process environment, optionally fall back to a default,
//! and optionally validate the result against an allowed set of values.
//!
//! ```
//! use require_env::{EnvVar, StaticEnv};
//!
//! let env = StaticEnv::new().set("LOG_FORMAT", "json");
//! let format = EnvVar::new("LOG_FORMAT")
//!     .with_allowed_values(["plain", "json"])
//!     .with_default("plain")
//!     .require_from(&env)?;
//! assert_eq!(format, "json");
//! # Ok::<(), require_env::EnvVarError>(())
//! ```
//!
//! Lookups go through the [`EnvSource`] trait so callers can resolve against
//! the real process environment ([`ProcessEnv`], the default for
//! [`EnvVar::require`]) or an in-memory mapping ([`StaticEnv`]) without
//! touching process-global state.

mod error;
mod require;
mod source;

pub use error::EnvVarError;
pub use require::{EnvVar, require_env_var};
pub use source::{EnvSource, ProcessEnv, StaticEnv, var_or_none};
