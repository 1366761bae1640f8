//! Platform domain entities and their closed enumerations.
//!
//! These are the shapes every serializer and deserializer on the platform
//! validates against. Wire field names are camelCase, enum tags snake_case,
//! timestamps RFC 3339 text, and monetary fields plain JSON numbers.

mod alert;
mod analytics;
mod id;
mod market;
mod news;
mod portfolio;
mod risk;
mod trade;
mod user;

pub use alert::{Alert, AlertCondition, AlertOperator, AlertType};
pub use analytics::{AssetAllocation, AssetCorrelation, PortfolioAnalytics, SectorAllocation};
pub use id::{
    AlertId, ArticleId, HoldingId, PortfolioId, RiskProfileId, Symbol, TradeId, UserId,
};
pub use market::{
    FinancialInstrument, FinancialRatios, InstrumentType, MarketData, MarketIndicator, Stock,
};
pub use news::{NewsArticle, NewsCategory, NewsSentiment};
pub use portfolio::{Holding, PerformanceData, Portfolio};
pub use risk::{
    InvestmentGoal, RiskProfile, RiskQuestionnaireResponse, RiskTolerance, TimeHorizon,
};
pub use trade::{Trade, TradeSide, TradeStatus};
pub use user::{NotificationSettings, Theme, User, UserPreferences, UserRole};
