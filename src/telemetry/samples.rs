//! Golden log-event fixtures.
//!
//! Canonical examples of well-formed events per category, used by tests and
//! by downstream consumers as reference payloads. Not runtime logic.

use serde_json::{json, Map, Value};

use super::category::LogCategory;
use super::event::{LogContext, LogEvent, LogLevel};

fn metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("fixture metadata is always a JSON object"),
    }
}

/// A user opening their portfolio overview.
#[must_use]
pub fn portfolio_view() -> LogEvent {
    LogEvent::new(
        LogLevel::Info,
        LogCategory::PortfolioView,
        "User viewed portfolio",
    )
    .with_context(LogContext {
        user_id: Some("user_123".to_string()),
        portfolio_id: Some("portfolio_456".to_string()),
        component: Some("PortfolioOverview".to_string()),
        ..LogContext::default()
    })
}

/// A successful buy execution with fill details in metadata.
#[must_use]
pub fn trade_execution() -> LogEvent {
    LogEvent::new(
        LogLevel::Info,
        LogCategory::TradeExecution,
        "Trade executed successfully",
    )
    .with_context(LogContext {
        user_id: Some("user_123".to_string()),
        transaction_id: Some("trade_789".to_string()),
        action: Some("buy_stock".to_string()),
        ..LogContext::default()
    })
    .with_metadata(metadata(json!({
        "symbol": "AAPL",
        "shares": 10,
        "price": 185.25,
        "totalAmount": 1852.50,
    })))
}

/// A failed backend call with endpoint diagnostics.
#[must_use]
pub fn api_error() -> LogEvent {
    LogEvent::new(
        LogLevel::Error,
        LogCategory::ApiError,
        "Portfolio API request failed",
    )
    .with_context(LogContext {
        user_id: Some("user_123".to_string()),
        component: Some("PortfolioService".to_string()),
        ..LogContext::default()
    })
    .with_metadata(metadata(json!({
        "endpoint": "/api/portfolios",
        "statusCode": 500,
        "responseTime": 5000,
    })))
}

/// A page load with timing and bundle metrics.
#[must_use]
pub fn page_load() -> LogEvent {
    LogEvent::new(LogLevel::Info, LogCategory::PageLoad, "Page loaded")
        .with_context(LogContext {
            user_id: Some("user_123".to_string()),
            component: Some("TradingDashboard".to_string()),
            ..LogContext::default()
        })
        .with_metadata(metadata(json!({
            "loadTime": 1250,
            "route": "/trading",
            "bundleSize": 245000,
        })))
}
