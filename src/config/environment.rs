//! Environment variable access for configuration resolution.
//!
//! Configuration is resolved once at startup from an injected [`EnvSource`]
//! rather than ambient `std::env` lookups inside business logic. Production
//! code passes [`ProcessEnv`]; tests pass a `HashMap`-backed fake.

use std::collections::HashMap;

/// Deployment-contract variable names.
///
/// These names are shared with the rest of the platform's deploy tooling
/// and must not be renamed here.
pub mod vars {
    /// Runtime mode: `development`, `production`, or anything else.
    pub const NODE_ENV: &str = "NODE_ENV";
    /// Remote log-collector endpoint URL.
    pub const LOGGING_ENDPOINT: &str = "VITE_LOGGING_ENDPOINT";
    /// API key for the remote log collector.
    pub const LOGGING_API_KEY: &str = "VITE_LOGGING_API_KEY";
    /// Error-tracking DSN.
    pub const SENTRY_DSN: &str = "VITE_SENTRY_DSN";
}

/// Source of environment variables.
pub trait EnvSource {
    /// Look up a variable; `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, resolving unset to the empty string.
    ///
    /// The configuration contract never distinguishes unset from empty for
    /// these variables, so resolution flattens both to `""`.
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// [`EnvSource`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Apply a `.env` file (if present) and return the process source.
    #[must_use]
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Recognized runtime modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    Development,
    Production,
    /// Anything other than the two recognized modes, including unset.
    #[default]
    Other,
}

impl RuntimeEnv {
    /// Classify a `NODE_ENV` value.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        match value {
            "development" => Self::Development,
            "production" => Self::Production,
            _ => Self::Other,
        }
    }

    /// Read and classify `NODE_ENV` from the given source.
    pub fn resolve(env: &impl EnvSource) -> Self {
        Self::classify(&env.var_or_empty(vars::NODE_ENV))
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}
