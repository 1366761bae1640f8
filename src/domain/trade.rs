//! Trade record and lifecycle.
//!
//! A trade is created `Pending` and moves exactly once to one of the
//! terminal states: `Executed`, `Cancelled`, or `Failed`. There is no
//! backward transition, and `executed_at` is set only on execution.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{PortfolioId, Symbol, TradeId};
use crate::error::DomainError;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(DomainError::UnknownEnumValue {
                ty: "TradeSide",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Pending,
    Executed,
    Cancelled,
    Failed,
}

impl TradeStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Executed => "executed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }

    /// True once the status can no longer change.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "executed" => Ok(Self::Executed),
            "cancelled" => Ok(Self::Cancelled),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::UnknownEnumValue {
                ty: "TradeStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// A trade against one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: TradeId,
    pub portfolio_id: PortfolioId,
    pub symbol: Symbol,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub shares: Decimal,
    pub price: Decimal,
    pub total_amount: Decimal,
    pub fees: Decimal,
    pub status: TradeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    fn transition(&mut self, to: TradeStatus) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.status.as_str(),
                to: to.as_str(),
            });
        }
        self.status = to;
        Ok(())
    }

    /// Mark the trade executed at the given time.
    ///
    /// The only operation that sets `executed_at`. Valid from `Pending` only.
    pub fn execute(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.transition(TradeStatus::Executed)?;
        self.executed_at = Some(at);
        Ok(())
    }

    /// Cancel a pending trade.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition(TradeStatus::Cancelled)
    }

    /// Mark a pending trade as failed at the venue.
    pub fn fail(&mut self) -> Result<(), DomainError> {
        self.transition(TradeStatus::Failed)
    }
}
