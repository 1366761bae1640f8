//! Typed entity identifiers.
//!
//! All platform identifiers are opaque string tokens on the wire. Each gets
//! its own newtype so a `UserId` can never be passed where a `PortfolioId`
//! is expected. Inner strings are private; construction goes through the
//! defined constructors.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh identifier (UUID v4 with the entity prefix).
            #[must_use]
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "_{}"), Uuid::new_v4()))
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// User identifier.
    UserId,
    "user"
);

string_id!(
    /// Portfolio identifier.
    PortfolioId,
    "portfolio"
);

string_id!(
    /// Holding identifier - one instrument position within a portfolio.
    HoldingId,
    "holding"
);

string_id!(
    /// Trade identifier.
    TradeId,
    "trade"
);

string_id!(
    /// Alert identifier.
    AlertId,
    "alert"
);

string_id!(
    /// News article identifier.
    ArticleId,
    "article"
);

string_id!(
    /// Risk profile identifier.
    RiskProfileId,
    "risk"
);

/// Ticker symbol - newtype for type safety.
///
/// Unlike the entity identifiers above, symbols come from exchanges and are
/// never minted by the platform, so there is no `generate` constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new `Symbol` from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
