//! Response envelope types.
//!
//! - [`ApiResponse`] - success/error wrapper around a payload
//! - [`PaginatedResponse`] / [`Pagination`] - list payloads with page math
//!
//! Both carry shape-level flexibility the contract does not allow: a
//! successful response may not carry an error string, and the stored
//! `total_pages` must agree with `ceil(total / limit)`. The `validate`
//! methods flag violations on receipt; the constructors can only produce
//! conformant values.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Generic envelope for single-payload endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Failed envelope carrying an error description.
    #[must_use]
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check the success-flag/field-population contract.
    ///
    /// `success=true` must not carry `error`; `success=false` must not
    /// carry `data`.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.success && self.error.is_some() {
            return Err(ContractError::SuccessWithError);
        }
        if !self.success && self.data.is_some() {
            return Err(ContractError::FailureWithData);
        }
        Ok(())
    }
}

/// Page bookkeeping for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// Page count implied by `total` and `limit`: `ceil(total / limit)`.
    ///
    /// A zero limit implies zero pages rather than a division error.
    #[must_use]
    pub fn expected_total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    /// Check that the stored `total_pages` matches the derivation.
    pub fn validate(&self) -> Result<(), ContractError> {
        let expected = self.expected_total_pages();
        if self.total_pages != expected {
            return Err(ContractError::PaginationMismatch {
                expected,
                actual: self.total_pages,
            });
        }
        Ok(())
    }
}

/// Envelope for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Build a page with `total_pages` derived rather than supplied.
    #[must_use]
    pub fn new(data: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        let mut pagination = Pagination {
            page,
            limit,
            total,
            total_pages: 0,
        };
        pagination.total_pages = pagination.expected_total_pages();
        Self { data, pagination }
    }

    /// Check the page-count derivation on a received payload.
    pub fn validate(&self) -> Result<(), ContractError> {
        self.pagination.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_five_items_at_ten_per_page_is_ten_pages() {
        let page = PaginatedResponse::new(vec![0u8; 10], 1, 10, 95);
        assert_eq!(page.pagination.total_pages, 10);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn zero_limit_implies_zero_pages() {
        let pagination = Pagination {
            page: 1,
            limit: 0,
            total: 42,
            total_pages: 0,
        };
        assert!(pagination.validate().is_ok());
    }
}
