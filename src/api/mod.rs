//! API envelope and request contracts.
//!
//! - [`ApiResponse`] / [`PaginatedResponse`] - response envelopes with
//!   receiver-side conformance checks
//! - request bodies for login, portfolio creation, and trade submission

mod request;
mod response;

pub use request::{CreatePortfolioRequest, LoginRequest, OrderType, TradeRequest};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
