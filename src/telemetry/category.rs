//! Log category taxonomy.
//!
//! Downstream log search and alerting index on the exact string tags emitted
//! here, so the tags are a wire contract: never rename one, only add new
//! variants. Consumers match exhaustively, which surfaces additions at
//! compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Classification tag attached to every emitted log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    // User actions
    UserAction,
    Navigation,
    Authentication,

    // Trading and portfolio
    PortfolioView,
    PortfolioUpdate,
    TradeExecution,
    TradeFailure,
    MarketData,

    // Performance
    PageLoad,
    ApiCall,
    ComponentRender,
    BundleLoad,

    // Errors
    JavascriptError,
    ApiError,
    NetworkError,
    ValidationError,

    // Security
    SecurityEvent,
    SuspiciousActivity,
    FailedLogin,

    // Business events
    FeatureFlag,
    AbTest,
    Conversion,
    UserOnboarding,
}

impl LogCategory {
    /// Every category, for consumers that index the full taxonomy.
    pub const ALL: [LogCategory; 23] = [
        Self::UserAction,
        Self::Navigation,
        Self::Authentication,
        Self::PortfolioView,
        Self::PortfolioUpdate,
        Self::TradeExecution,
        Self::TradeFailure,
        Self::MarketData,
        Self::PageLoad,
        Self::ApiCall,
        Self::ComponentRender,
        Self::BundleLoad,
        Self::JavascriptError,
        Self::ApiError,
        Self::NetworkError,
        Self::ValidationError,
        Self::SecurityEvent,
        Self::SuspiciousActivity,
        Self::FailedLogin,
        Self::FeatureFlag,
        Self::AbTest,
        Self::Conversion,
        Self::UserOnboarding,
    ];

    /// The stable wire tag for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserAction => "user_action",
            Self::Navigation => "navigation",
            Self::Authentication => "authentication",
            Self::PortfolioView => "portfolio_view",
            Self::PortfolioUpdate => "portfolio_update",
            Self::TradeExecution => "trade_execution",
            Self::TradeFailure => "trade_failure",
            Self::MarketData => "market_data",
            Self::PageLoad => "page_load",
            Self::ApiCall => "api_call",
            Self::ComponentRender => "component_render",
            Self::BundleLoad => "bundle_load",
            Self::JavascriptError => "javascript_error",
            Self::ApiError => "api_error",
            Self::NetworkError => "network_error",
            Self::ValidationError => "validation_error",
            Self::SecurityEvent => "security_event",
            Self::SuspiciousActivity => "suspicious_activity",
            Self::FailedLogin => "failed_login",
            Self::FeatureFlag => "feature_flag",
            Self::AbTest => "ab_test",
            Self::Conversion => "conversion",
            Self::UserOnboarding => "user_onboarding",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::UnknownEnumValue {
                ty: "LogCategory",
                value: s.to_string(),
            })
    }
}
