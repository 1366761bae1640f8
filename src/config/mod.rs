//! Process-start configuration.
//!
//! - [`environment`] - injected environment-variable source
//! - [`logger`] - the logger configuration snapshot and its resolver

pub mod environment;
pub mod logger;

pub use environment::{EnvSource, ProcessEnv, RuntimeEnv};
pub use logger::{
    ConsoleConfig, ConsoleFormat, ErrorTrackingConfig, LoggerConfig, PerformanceConfig,
    PrivacyConfig, RemoteConfig,
};
