//! User identity and preference types.
//!
//! - [`User`] - platform account with nested preferences
//! - [`UserPreferences`] / [`NotificationSettings`] - per-user settings
//! - [`UserRole`] / [`Theme`] - closed enumerations

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::UserId;
use crate::error::DomainError;

/// Platform role, controlling feature access.
///
/// Closed set; deserialization rejects anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Investor,
    Trader,
    Advisor,
    Admin,
}

impl UserRole {
    /// Wire tag for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Trader => "trader",
            Self::Advisor => "advisor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "investor" => Ok(Self::Investor),
            "trader" => Ok(Self::Trader),
            "advisor" => Ok(Self::Advisor),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::UnknownEnumValue {
                ty: "UserRole",
                value: other.to_string(),
            }),
        }
    }
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DomainError::UnknownEnumValue {
                ty: "Theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Per-channel notification toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub price_alerts: bool,
    pub portfolio_updates: bool,
}

/// Per-user display and notification preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    /// ISO 4217 display currency, e.g. "USD".
    pub currency: String,
    /// IANA timezone name, e.g. "America/New_York".
    pub timezone: String,
    pub notifications: NotificationSettings,
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_rejects_unknown_value() {
        let err = "superuser".parse::<UserRole>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownEnumValue {
                ty: "UserRole",
                value: "superuser".to_string(),
            }
        );
    }

    #[test]
    fn role_serde_tags_match_wire_contract() {
        for role in [
            UserRole::Investor,
            UserRole::Trader,
            UserRole::Advisor,
            UserRole::Admin,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
