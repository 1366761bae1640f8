//! News and analysis types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ArticleId, Symbol};
use crate::error::DomainError;

/// Editorial sentiment assigned to an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsSentiment {
    Positive,
    Neutral,
    Negative,
}

impl NewsSentiment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for NewsSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsSentiment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(DomainError::UnknownEnumValue {
                ty: "NewsSentiment",
                value: other.to_string(),
            }),
        }
    }
}

/// Topic bucket for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    Earnings,
    Market,
    Analysis,
    Regulatory,
    Company,
    Economic,
}

impl NewsCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Earnings => "earnings",
            Self::Market => "market",
            Self::Analysis => "analysis",
            Self::Regulatory => "regulatory",
            Self::Company => "company",
            Self::Economic => "economic",
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earnings" => Ok(Self::Earnings),
            "market" => Ok(Self::Market),
            "analysis" => Ok(Self::Analysis),
            "regulatory" => Ok(Self::Regulatory),
            "company" => Ok(Self::Company),
            "economic" => Ok(Self::Economic),
            other => Err(DomainError::UnknownEnumValue {
                ty: "NewsCategory",
                value: other.to_string(),
            }),
        }
    }
}

/// A news article tagged with symbols, sentiment, and topic buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub symbols: Vec<Symbol>,
    pub sentiment: NewsSentiment,
    pub categories: Vec<NewsCategory>,
}

impl NewsArticle {
    /// True when the article is tagged with the given symbol.
    #[must_use]
    pub fn mentions(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_rejects_unknown_value() {
        assert!("bullish".parse::<NewsSentiment>().is_err());
        assert!(serde_json::from_str::<NewsSentiment>("\"bullish\"").is_err());
    }

    #[test]
    fn every_category_tag_round_trips() {
        for category in [
            NewsCategory::Earnings,
            NewsCategory::Market,
            NewsCategory::Analysis,
            NewsCategory::Regulatory,
            NewsCategory::Company,
            NewsCategory::Economic,
        ] {
            assert_eq!(category.as_str().parse::<NewsCategory>().unwrap(), category);
        }
    }
}
