//! User alerts on prices, volumes, portfolios, news, and ratios.
//!
//! An alert fires at most once: [`Alert::trigger`] sets `is_triggered` and
//! `triggered_at` the first time and rejects any further call. Whether a
//! triggered alert may re-arm is an open product question; until that is
//! answered no reset operation exists.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{AlertId, PortfolioId, Symbol, UserId};
use crate::error::DomainError;

/// What quantity the alert watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Price,
    Volume,
    PortfolioValue,
    News,
    Ratio,
}

impl AlertType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Volume => "volume",
            Self::PortfolioValue => "portfolio_value",
            Self::News => "news",
            Self::Ratio => "ratio",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "volume" => Ok(Self::Volume),
            "portfolio_value" => Ok(Self::PortfolioValue),
            "news" => Ok(Self::News),
            "ratio" => Ok(Self::Ratio),
            other => Err(DomainError::UnknownEnumValue {
                ty: "AlertType",
                value: other.to_string(),
            }),
        }
    }
}

/// Comparison applied to the watched quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertOperator {
    GreaterThan,
    LessThan,
    Equals,
    PercentageChange,
}

impl AlertOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::Equals => "equals",
            Self::PercentageChange => "percentage_change",
        }
    }
}

impl fmt::Display for AlertOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertOperator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greater_than" => Ok(Self::GreaterThan),
            "less_than" => Ok(Self::LessThan),
            "equals" => Ok(Self::Equals),
            "percentage_change" => Ok(Self::PercentageChange),
            other => Err(DomainError::UnknownEnumValue {
                ty: "AlertOperator",
                value: other.to_string(),
            }),
        }
    }
}

/// Threshold condition for an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCondition {
    pub operator: AlertOperator,
    pub value: Decimal,
    /// Evaluation window, e.g. "1d". Only meaningful for change operators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// A user alert, optionally scoped to a symbol or portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: AlertId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<PortfolioId>,
    pub condition: AlertCondition,
    pub is_active: bool,
    pub is_triggered: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Record that the alert's condition fired at the given time.
    ///
    /// Sets `is_triggered` and `triggered_at` exactly once; a second call
    /// errors and leaves the original timestamp in place.
    pub fn trigger(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_triggered {
            return Err(DomainError::AlreadyTriggered {
                alert_id: self.id.as_str().to_string(),
            });
        }
        self.is_triggered = true;
        self.triggered_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price_alert() -> Alert {
        Alert {
            id: "alert_1".into(),
            user_id: "user_123".into(),
            alert_type: AlertType::Price,
            symbol: Some("AAPL".into()),
            portfolio_id: None,
            condition: AlertCondition {
                operator: AlertOperator::GreaterThan,
                value: dec!(200),
                timeframe: None,
            },
            is_active: true,
            is_triggered: false,
            created_at: Utc::now(),
            triggered_at: None,
        }
    }

    #[test]
    fn trigger_sets_timestamp_once() {
        let mut alert = price_alert();
        let first = Utc::now();
        alert.trigger(first).unwrap();
        assert!(alert.is_triggered);
        assert_eq!(alert.triggered_at, Some(first));

        let err = alert.trigger(Utc::now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::AlreadyTriggered {
                alert_id: "alert_1".to_string(),
            }
        );
        assert_eq!(alert.triggered_at, Some(first));
    }

    #[test]
    fn untriggered_alert_serializes_without_triggered_at() {
        let json = serde_json::to_value(price_alert()).unwrap();
        assert!(json.get("triggeredAt").is_none());
        assert_eq!(json["type"], "price");
        assert_eq!(json["condition"]["operator"], "greater_than");
    }
}
