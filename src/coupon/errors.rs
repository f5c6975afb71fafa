//! # Coupon Errors
//!
//! Error types for coupon operations.

use axum::http::StatusCode;
use thiserror::Error;

/// Result type for coupon operations
pub type CouponResult<T> = Result<T, CouponError>;

/// Message reported for an unknown coupon id
pub const NOT_FOUND_MESSAGE: &str = "Coupon does not exist!";

/// Message reported when a coupon name is already taken
pub const DUPLICATE_NAME_MESSAGE: &str = "Coupon Name already Exist";

/// Coupon service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed a field rule
    #[error("{0}")]
    Validation(String),

    /// Name collides (case-insensitively) with an existing coupon
    #[error("Coupon Name already Exist")]
    DuplicateName,

    /// No coupon with the requested id
    #[error("Coupon does not exist!")]
    NotFound,

    /// Id already present in the store
    #[error("Coupon id {0} already exists")]
    DuplicateId(i32),

    /// No id left above the current maximum
    #[error("No coupon ids left to assign")]
    IdExhausted,

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store lock poisoned by a panicking writer
    #[error("Coupon store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CouponError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CouponError::Validation(_)
            | CouponError::DuplicateName
            | CouponError::NotFound
            | CouponError::DuplicateId(_)
            | CouponError::IdExhausted
            | CouponError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            CouponError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn poisoned() -> Self {
        CouponError::StoreUnavailable("Lock poisoned".to_string())
    }
}
