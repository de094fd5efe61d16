//! # Applicability Gate
//!
//! The eligibility predicate independent of discount-type-specific logic.
//!
//! ## Checks (in order, short-circuit on first failure)
//! ```text
//! 1. Expiration       expiration set and now strictly after it?  → no
//! 2. Usage exhaustion limit > 0 and used_count >= limit?         → no
//! 3. User restriction user-specific type and cart user not in
//!                     the coupon's eligible list?                → no
//! ```
//!
//! The gate is stateless and operates on a point-in-time snapshot of the
//! coupon: a concurrent usage increment landing between the gate check
//! and the engine's own increment is not detected here. The store
//! collaborator owns that race (see `CouponStore::increment_usage`).

use chrono::{DateTime, Utc};

use crate::types::{Cart, Coupon, CouponType};

/// Decides whether a coupon is currently eligible for a cart.
///
/// Evaluates against the current wall clock; see [`is_applicable_at`] for
/// the clock-injectable form used in tests.
pub fn is_applicable(coupon: &Coupon, cart: &Cart) -> bool {
    is_applicable_at(coupon, cart, Utc::now())
}

/// Clock-injectable applicability check.
pub fn is_applicable_at(coupon: &Coupon, cart: &Cart, now: DateTime<Utc>) -> bool {
    // Expiration: strictly after the instant means expired.
    if let Some(expires) = coupon.expiration_date {
        if now > expires {
            return false;
        }
    }

    // Usage exhaustion: limit 0 means unlimited.
    if coupon.usage_limit > 0 && coupon.used_count >= coupon.usage_limit {
        return false;
    }

    // User restriction: only the user-specific type gates on this.
    if coupon.coupon_type == CouponType::UserSpecific {
        match cart.user_id {
            Some(user_id) if coupon.users.contains(&user_id) => {}
            _ => return false,
        }
    }

    true
}
