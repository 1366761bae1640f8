use thiserror::Error;

/// Domain-level validation errors with structured variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown {ty} value: '{value}'")]
    UnknownEnumValue { ty: &'static str, value: String },

    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("alert '{alert_id}' already triggered")]
    AlreadyTriggered { alert_id: String },

    #[error("derived value mismatch for {field}: expected {expected}, got {actual}")]
    ValueMismatch {
        field: &'static str,
        expected: rust_decimal::Decimal,
        actual: rust_decimal::Decimal,
    },

    #[error("{list} allocation percentages sum to {sum}, expected 100")]
    AllocationSum {
        list: &'static str,
        sum: rust_decimal::Decimal,
    },
}

/// API envelope conformance errors.
///
/// These flag payloads whose shape is representable but whose field
/// combination violates the response contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    #[error("response marked success but carries an error field")]
    SuccessWithError,

    #[error("response marked failure but carries a data payload")]
    FailureWithData,

    #[error("pagination totalPages mismatch: expected {expected}, got {actual}")]
    PaginationMismatch { expected: u64, actual: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
