//! Shared contracts for the financial platform.
//!
//! This crate is the single source of truth for the data shapes exchanged
//! between the platform's services: domain entities, API envelopes, the
//! logging taxonomy, and the logger configuration snapshot. It declares and
//! validates shapes; it executes nothing. Trading backends, market-data
//! ingestion, the log transport, and the UI all live elsewhere and consume
//! these types at their serialization boundaries.
//!
//! # Modules
//!
//! - [`domain`] - entities and closed enumerations: users, portfolios,
//!   holdings, trades, market data, risk profiles, analytics, news, alerts
//! - [`api`] - response envelopes and request bodies, with receiver-side
//!   conformance checks for the derived-value contracts
//! - [`telemetry`] - the log category taxonomy (a wire contract), event
//!   shapes, and golden fixtures
//! - [`config`] - the logger configuration resolver, built once at startup
//!   from an injected environment source
//! - [`error`] - structured error types
//!
//! # Conventions
//!
//! Wire field names are camelCase, enum tags snake_case, timestamps RFC 3339
//! text, monetary fields plain JSON numbers backed by `rust_decimal`.
//! Optional fields are `Option<T>` and omitted when absent, so "unset" stays
//! distinguishable from "empty".
//!
//! # Example
//!
//! ```
//! use finplat_contracts::api::PaginatedResponse;
//! use finplat_contracts::config::LoggerConfig;
//! use finplat_contracts::domain::Stock;
//! use std::collections::HashMap;
//!
//! let config = LoggerConfig::resolve(&HashMap::new());
//! config.init_tracing();
//!
//! let page: PaginatedResponse<Stock> = PaginatedResponse::new(vec![], 1, 10, 95);
//! assert_eq!(page.pagination.total_pages, 10);
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

pub use error::{ContractError, DomainError, Error, Result};
