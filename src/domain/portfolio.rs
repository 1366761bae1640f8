//! Portfolio and holding types.
//!
//! - [`Portfolio`] - a user's collection of holdings with summary figures
//! - [`Holding`] - one instrument position, with derived gain fields
//! - [`PerformanceData`] - a point in the portfolio's time series
//!
//! The summary fields (`total_value`, `unrealized_gain`, ...) are stored on
//! the wire, not recomputed on deserialization. The `validate_*` methods
//! implement the derived-consistency contract: receivers call them to check
//! that a payload's stored figures agree with what the row-level data imply.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::id::{HoldingId, PortfolioId, Symbol, UserId};
use crate::error::DomainError;

/// Tolerance for comparing independently-derived monetary figures.
///
/// Half a cent absorbs rounding performed by upstream producers.
const DERIVED_TOLERANCE: Decimal = dec!(0.005);

fn within_tolerance(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    (a - b).abs() <= tolerance
}

/// One instrument position within a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: HoldingId,
    pub symbol: Symbol,
    pub company_name: String,
    pub shares: Decimal,
    pub current_price: Decimal,
    pub total_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealized_gain: Decimal,
    pub unrealized_gain_percent: Decimal,
    pub sector: String,
    pub last_updated: DateTime<Utc>,
}

impl Holding {
    /// Derive the unrealized gain from stored value and cost basis.
    #[must_use]
    pub fn derive_unrealized_gain(total_value: Decimal, cost_basis: Decimal) -> Decimal {
        total_value - cost_basis
    }

    /// Derive the unrealized gain percentage from stored value and cost basis.
    ///
    /// Zero cost basis yields zero rather than dividing by zero; a position
    /// acquired for nothing has no meaningful percentage return.
    #[must_use]
    pub fn derive_unrealized_gain_percent(total_value: Decimal, cost_basis: Decimal) -> Decimal {
        if cost_basis.is_zero() {
            return Decimal::ZERO;
        }
        Self::derive_unrealized_gain(total_value, cost_basis) / cost_basis * dec!(100)
    }

    /// Check the stored gain fields against their derivations.
    ///
    /// `unrealized_gain` must equal `total_value - cost_basis` and
    /// `unrealized_gain_percent` must equal `gain / cost_basis * 100`,
    /// both within [`DERIVED_TOLERANCE`].
    pub fn validate_derived(&self) -> Result<(), DomainError> {
        let expected_gain = Self::derive_unrealized_gain(self.total_value, self.cost_basis);
        if !within_tolerance(self.unrealized_gain, expected_gain, DERIVED_TOLERANCE) {
            return Err(DomainError::ValueMismatch {
                field: "unrealizedGain",
                expected: expected_gain,
                actual: self.unrealized_gain,
            });
        }

        let expected_percent =
            Self::derive_unrealized_gain_percent(self.total_value, self.cost_basis);
        if !within_tolerance(
            self.unrealized_gain_percent,
            expected_percent,
            DERIVED_TOLERANCE,
        ) {
            return Err(DomainError::ValueMismatch {
                field: "unrealizedGainPercent",
                expected: expected_percent,
                actual: self.unrealized_gain_percent,
            });
        }

        Ok(())
    }
}

/// A point in a portfolio's performance time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub date: DateTime<Utc>,
    pub value: Decimal,
    /// Period return in currency terms. Wire name is `return`, which is a
    /// Rust keyword, hence the explicit rename.
    #[serde(rename = "return")]
    pub period_return: Decimal,
    pub return_percent: Decimal,
}

/// A user's portfolio: holdings plus summary and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: PortfolioId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_value: Decimal,
    pub day_change: Decimal,
    pub day_change_percent: Decimal,
    pub holdings: Vec<Holding>,
    pub performance: Vec<PerformanceData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Sum of the holdings' stored total values.
    #[must_use]
    pub fn holdings_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.total_value).sum()
    }

    /// Check that `total_value` agrees with the sum of holding totals.
    pub fn validate_totals(&self) -> Result<(), DomainError> {
        let expected = self.holdings_value();
        if !within_tolerance(self.total_value, expected, DERIVED_TOLERANCE) {
            return Err(DomainError::ValueMismatch {
                field: "totalValue",
                expected,
                actual: self.total_value,
            });
        }
        Ok(())
    }
}
