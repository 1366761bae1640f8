//! Derived portfolio analytics.
//!
//! [`PortfolioAnalytics`] is a read-only aggregate view computed by the
//! analytics backend. The risk statistics (volatility, sharpe, beta, alpha,
//! drawdown) are opaque numeric fields here; the only contract this crate
//! checks is that each allocation breakdown sums to 100 percent.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::id::PortfolioId;
use super::market::InstrumentType;
use crate::error::DomainError;

/// Tolerance for allocation percentage sums. Upstream rounds each slice to
/// two decimal places, so a list of slices can be off by a few hundredths.
const ALLOCATION_TOLERANCE: Decimal = dec!(0.05);

/// Pairwise correlation between two held assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCorrelation {
    pub asset1: String,
    pub asset2: String,
    pub correlation: Decimal,
}

/// One slice of the sector breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,
    pub percentage: Decimal,
    pub value: Decimal,
}

/// One slice of the asset-class breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_type: InstrumentType,
    pub percentage: Decimal,
    pub value: Decimal,
}

/// Read-only aggregate analytics for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    pub portfolio_id: PortfolioId,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
    pub annualized_return: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    pub beta: Decimal,
    pub alpha: Decimal,
    pub max_drawdown: Decimal,
    pub correlations: Vec<AssetCorrelation>,
    pub sector_allocation: Vec<SectorAllocation>,
    pub asset_allocation: Vec<AssetAllocation>,
}

impl PortfolioAnalytics {
    /// Check that each non-empty allocation list sums to 100 percent.
    ///
    /// Empty lists are allowed: a portfolio with no priced holdings has no
    /// breakdown rather than one summing to zero.
    pub fn validate_allocations(&self) -> Result<(), DomainError> {
        validate_sum(
            "sector",
            self.sector_allocation.iter().map(|a| a.percentage),
        )?;
        validate_sum("asset", self.asset_allocation.iter().map(|a| a.percentage))?;
        Ok(())
    }
}

fn validate_sum(
    list: &'static str,
    percentages: impl Iterator<Item = Decimal>,
) -> Result<(), DomainError> {
    let mut sum = Decimal::ZERO;
    let mut any = false;
    for p in percentages {
        sum += p;
        any = true;
    }
    if any && (sum - dec!(100)).abs() > ALLOCATION_TOLERANCE {
        return Err(DomainError::AllocationSum { list, sum });
    }
    Ok(())
}
