//! Risk assessment types.
//!
//! - [`RiskProfile`] - a user's assessed tolerance, horizon, and goals
//! - [`RiskQuestionnaireResponse`] - one answered questionnaire item
//! - [`RiskTolerance`] / [`TimeHorizon`] / [`InvestmentGoal`] - closed enums

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{RiskProfileId, UserId};
use crate::error::DomainError;

/// Appetite for volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTolerance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(DomainError::UnknownEnumValue {
                ty: "RiskTolerance",
                value: other.to_string(),
            }),
        }
    }
}

/// Investment horizon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl TimeHorizon {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeHorizon {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(DomainError::UnknownEnumValue {
                ty: "TimeHorizon",
                value: other.to_string(),
            }),
        }
    }
}

/// What the user is investing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentGoal {
    Retirement,
    Education,
    Home,
    Emergency,
    WealthBuilding,
    Income,
}

impl InvestmentGoal {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retirement => "retirement",
            Self::Education => "education",
            Self::Home => "home",
            Self::Emergency => "emergency",
            Self::WealthBuilding => "wealth_building",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for InvestmentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentGoal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retirement" => Ok(Self::Retirement),
            "education" => Ok(Self::Education),
            "home" => Ok(Self::Home),
            "emergency" => Ok(Self::Emergency),
            "wealth_building" => Ok(Self::WealthBuilding),
            "income" => Ok(Self::Income),
            other => Err(DomainError::UnknownEnumValue {
                ty: "InvestmentGoal",
                value: other.to_string(),
            }),
        }
    }
}

/// One answered item from the risk questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskQuestionnaireResponse {
    pub question_id: String,
    pub question: String,
    pub answer: String,
    pub weight: Decimal,
}

/// A user's assessed risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub id: RiskProfileId,
    pub user_id: UserId,
    pub risk_tolerance: RiskTolerance,
    pub time_horizon: TimeHorizon,
    pub investment_goals: Vec<InvestmentGoal>,
    pub questionnaire: Vec<RiskQuestionnaireResponse>,
    pub score: Decimal,
    pub last_assessed: DateTime<Utc>,
}

impl RiskProfile {
    /// Recompute the aggregate score as the sum of response weights.
    ///
    /// The stored `score` is produced by the assessment backend; this is the
    /// receiver-side derivation used to cross-check it.
    #[must_use]
    pub fn weighted_score(&self) -> Decimal {
        self.questionnaire.iter().map(|r| r.weight).sum()
    }
}
