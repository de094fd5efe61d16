//! # Error Types
//!
//! Domain error types for promo-core.
//!
//! ## Error Hierarchy
//! ```text
//! promo-core errors (this file)
//! ├── EngineError      - Discount engine failures
//! └── ValidationError  - Request input validation failures
//!
//! promo-core store contract (store.rs)
//! └── StoreError       - Catalog persistence failures
//!
//! promo-api errors (in app)
//! └── ApiError         - What HTTP clients see (status + JSON envelope)
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Engine failure messages are the wire-level messages clients see,
//!    so their text is part of the API contract

use thiserror::Error;

use crate::store::StoreError;

// =============================================================================
// Engine Error
// =============================================================================

/// Discount engine failures.
///
/// Listing applicable coupons is lenient: a coupon hitting
/// [`EngineError::InvalidDetails`] or an unregistered type is silently
/// skipped so one malformed catalog entry cannot fail the whole scan.
/// Applying a specific coupon is strict: every variant here is surfaced
/// to the caller verbatim.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The coupon id is unknown to the store.
    #[error("coupon not found")]
    NotFound,

    /// The applicability gate rejected the coupon (expired, usage limit
    /// exhausted, or user restriction unmet).
    #[error("coupon is not applicable")]
    NotApplicable,

    /// No strategy is registered for the coupon's type. Only the apply
    /// path surfaces this; listings skip such coupons.
    #[error("unsupported coupon type")]
    UnsupportedType,

    /// The type-specific detail payload did not match the expected shape.
    #[error("invalid coupon details")]
    InvalidDetails,

    /// A strategy precondition was not met (e.g. the buy-condition of a
    /// buy-x-get-y coupon is unsatisfied).
    #[error("coupon conditions not met")]
    ConditionsNotMet,

    /// The store collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Request input validation errors.
///
/// Used at the request boundary before engine logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid value for a field.
    #[error("{field} has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with EngineError.
pub type CoreResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================
