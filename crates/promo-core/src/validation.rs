//! # Validation Module
//!
//! Request-boundary checks, run by the API layer before engine logic.
//!
//! ## Validation Layers
//! ```text
//! Layer 1: Deserialization (serde)   - types, required fields
//! Layer 2: THIS MODULE               - value-level rules
//! Layer 3: Strategy decode boundary  - per-type payload shapes
//! ```

use crate::error::ValidationError;
use crate::types::{Cart, Coupon};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a cart submitted for discount evaluation.
///
/// ## Rules
/// - At least one item
/// - Every quantity > 0
/// - Every unit price > 0 and finite
pub fn validate_cart(cart: &Cart) -> ValidationResult<()> {
    if cart.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for item in &cart.items {
        if item.quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
        if !(item.price > 0.0 && item.price.is_finite()) {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a coupon record on create/update.
///
/// ## Rules
/// - `details` must be present (not JSON null)
/// - `used_count` must not exceed `usage_limit` when a limit is set
///
/// The payload *shape* is deliberately not checked here: reserved coupon
/// types may carry payloads no strategy can decode yet, and the catalog
/// accepts them (listings skip them, direct applies fail loudly).
pub fn validate_coupon(coupon: &Coupon) -> ValidationResult<()> {
    if coupon.details.is_null() {
        return Err(ValidationError::Required {
            field: "details".to_string(),
        });
    }

    if coupon.usage_limit > 0 && coupon.used_count > coupon.usage_limit {
        return Err(ValidationError::InvalidValue {
            field: "used_count".to_string(),
            reason: "exceeds usage_limit".to_string(),
        });
    }

    Ok(())
}
