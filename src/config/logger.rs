//! Logger configuration resolver.
//!
//! [`LoggerConfig::resolve`] builds one immutable snapshot from the injected
//! environment source at process start. The snapshot governs five
//! independent subsystems consumed by the external logging transport:
//! console output, remote shipping, error tracking, performance capture,
//! and the privacy policy the transport must honor.
//!
//! Remote logging enabled with an empty endpoint or API key is a latent
//! misconfiguration. The resolver keeps the flags exactly as resolved so the
//! combination stays visible, emits a single warning, and exposes
//! [`RemoteConfig::is_effective`] for the transport to gate on. It never
//! fabricates a default endpoint and never fails startup over it.

use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use super::environment::{vars, EnvSource, RuntimeEnv};
use crate::telemetry::LogLevel;

/// Console sink output format.
///
/// [`LoggerConfig::resolve`] always emits `Pretty`; `Json` exists for
/// transports that build a snapshot themselves and want machine-readable
/// console output. [`LoggerConfig::init_tracing`] honors both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleFormat {
    Pretty,
    Json,
}

/// Console logging for development.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub level: LogLevel,
    pub format: ConsoleFormat,
}

/// Remote log shipping for production.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Collector URL; empty when the variable is unset.
    pub endpoint: String,
    /// Collector API key; empty when the variable is unset.
    pub api_key: String,
    pub level: LogLevel,
    /// Events buffered before a flush.
    pub batch_size: usize,
    /// Maximum time between flushes.
    pub flush_interval_ms: u64,
}

impl RemoteConfig {
    /// True when the transport can actually ship: enabled with both
    /// endpoint and API key non-empty.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.enabled && !self.endpoint.is_empty() && !self.api_key.is_empty()
    }
}

/// Error-event reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorTrackingConfig {
    pub enabled: bool,
    /// Tracking DSN; empty when the variable is unset.
    pub dsn: String,
    /// Raw environment name reported with each event.
    pub environment: String,
    /// Fraction of error events reported remotely.
    pub sample_rate: f64,
}

/// Web-vitals and user-timing capture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceConfig {
    pub enabled: bool,
    /// Fraction of eligible measurements actually captured.
    pub sample_rate: f64,
    pub track_web_vitals: bool,
    pub track_user_timing: bool,
}

/// Declarative privacy obligations for the logging transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyConfig {
    pub exclude_pii: bool,
    pub mask_sensitive_data: bool,
    pub retention_days: u32,
    pub encrypt_logs: bool,
}

/// Complete logger configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    pub remote: RemoteConfig,
    pub error_tracking: ErrorTrackingConfig,
    pub performance: PerformanceConfig,
    pub privacy: PrivacyConfig,
}

impl LoggerConfig {
    /// Resolve the snapshot from the given environment source.
    pub fn resolve(env: &impl EnvSource) -> Self {
        let mode = RuntimeEnv::resolve(env);

        let remote = RemoteConfig {
            enabled: mode.is_production(),
            endpoint: env.var_or_empty(vars::LOGGING_ENDPOINT),
            api_key: env.var_or_empty(vars::LOGGING_API_KEY),
            level: LogLevel::Info,
            batch_size: 10,
            flush_interval_ms: 5_000,
        };
        if remote.enabled && !remote.is_effective() {
            warn!(
                endpoint_set = !remote.endpoint.is_empty(),
                api_key_set = !remote.api_key.is_empty(),
                "remote logging enabled but not configured; shipping disabled"
            );
        }

        let raw_env = env.var_or_empty(vars::NODE_ENV);
        let environment = if raw_env.is_empty() {
            "development".to_string()
        } else {
            raw_env
        };

        Self {
            console: ConsoleConfig {
                enabled: mode.is_development(),
                level: LogLevel::Debug,
                format: ConsoleFormat::Pretty,
            },
            remote,
            error_tracking: ErrorTrackingConfig {
                enabled: true,
                dsn: env.var_or_empty(vars::SENTRY_DSN),
                environment,
                sample_rate: if mode.is_production() { 0.1 } else { 1.0 },
            },
            performance: PerformanceConfig {
                enabled: true,
                sample_rate: if mode.is_production() { 0.01 } else { 1.0 },
                track_web_vitals: true,
                track_user_timing: true,
            },
            privacy: PrivacyConfig {
                exclude_pii: true,
                mask_sensitive_data: true,
                retention_days: 90,
                encrypt_logs: true,
            },
        }
    }

    /// Install a tracing subscriber honoring the console section.
    ///
    /// `RUST_LOG` still takes precedence over the configured level. Safe to
    /// call when a subscriber is already installed; the existing one wins.
    pub fn init_tracing(&self) {
        if !self.console.enabled {
            return;
        }
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.console.level.as_str()));

        match self.console.format {
            ConsoleFormat::Json => {
                let _ = fmt().json().with_env_filter(filter).try_init();
            }
            ConsoleFormat::Pretty => {
                let _ = fmt().with_env_filter(filter).try_init();
            }
        }
    }
}
