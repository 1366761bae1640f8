//! Market data and instrument reference types.
//!
//! - [`FinancialInstrument`] / [`InstrumentType`] - tradable asset reference data
//! - [`Stock`] - coarse per-symbol summary
//! - [`MarketData`] - point-in-time quote snapshot with book top and session range
//! - [`MarketIndicator`] - named market-wide indicator (index, rate, ...)
//! - [`FinancialRatios`] - fundamental ratios per symbol

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::Symbol;
use crate::error::DomainError;

/// Kind of tradable financial asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    Stock,
    Bond,
    Etf,
    MutualFund,
    Crypto,
    Option,
    Future,
}

impl InstrumentType {
    /// Wire tag for this instrument type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Bond => "bond",
            Self::Etf => "etf",
            Self::MutualFund => "mutual_fund",
            Self::Crypto => "crypto",
            Self::Option => "option",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock" => Ok(Self::Stock),
            "bond" => Ok(Self::Bond),
            "etf" => Ok(Self::Etf),
            "mutual_fund" => Ok(Self::MutualFund),
            "crypto" => Ok(Self::Crypto),
            "option" => Ok(Self::Option),
            "future" => Ok(Self::Future),
            other => Err(DomainError::UnknownEnumValue {
                ty: "InstrumentType",
                value: other.to_string(),
            }),
        }
    }
}

/// Reference data for a tradable asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInstrument {
    pub symbol: Symbol,
    pub name: String,
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    pub currency: String,
    pub exchange: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// Coarse per-symbol market summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: Symbol,
    pub company_name: String,
    pub current_price: Decimal,
    pub day_change: Decimal,
    pub day_change_percent: Decimal,
    pub volume: u64,
    pub market_cap: Decimal,
    pub sector: String,
    pub exchange: String,
    pub last_updated: DateTime<Utc>,
}

/// Point-in-time market snapshot for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub symbol: Symbol,
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    pub volume: u64,
    pub bid: Decimal,
    pub ask: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub open: Decimal,
    pub previous_close: Decimal,
}

impl MarketData {
    /// Bid/ask spread at snapshot time.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

/// A named market-wide indicator such as an index level or rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndicator {
    pub name: String,
    pub symbol: Symbol,
    pub value: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub description: String,
    pub last_updated: DateTime<Utc>,
}

/// Fundamental ratios for a symbol.
///
/// All opaque numeric fields; nothing here is computed by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    pub symbol: Symbol,
    pub pe_ratio: Decimal,
    pub pb_ratio: Decimal,
    pub eps_ratio: Decimal,
    pub debt_to_equity: Decimal,
    pub roe: Decimal,
    pub roa: Decimal,
    pub current_ratio: Decimal,
    pub quick_ratio: Decimal,
    pub dividend_yield: Decimal,
    pub payout_ratio: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn instrument_type_round_trips_through_serde() {
        let json = serde_json::to_string(&InstrumentType::MutualFund).unwrap();
        assert_eq!(json, "\"mutual_fund\"");
        let back: InstrumentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InstrumentType::MutualFund);
    }

    #[test]
    fn instrument_type_rejects_unknown_tag() {
        assert!(serde_json::from_str::<InstrumentType>("\"warrant\"").is_err());
        assert!("warrant".parse::<InstrumentType>().is_err());
    }

    #[test]
    fn spread_is_ask_minus_bid() {
        let snapshot = MarketData {
            symbol: "AAPL".into(),
            timestamp: Utc::now(),
            price: dec!(185.25),
            volume: 1_000,
            bid: dec!(185.20),
            ask: dec!(185.30),
            high: dec!(186.00),
            low: dec!(184.50),
            open: dec!(185.00),
            previous_close: dec!(184.75),
        };
        assert_eq!(snapshot.spread(), dec!(0.10));
    }
}
