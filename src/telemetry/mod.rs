//! Logging taxonomy and event contracts.
//!
//! - [`LogCategory`] - closed set of classification tags (wire contract)
//! - [`LogEvent`] / [`LogContext`] - the telemetry record shape
//! - [`samples`] - golden fixtures per category

mod category;
mod event;
pub mod samples;

pub use category::LogCategory;
pub use event::{ErrorDetails, LogContext, LogEvent, LogLevel};
