//! # Domain Types
//!
//! Core domain types for the discount engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │     Coupon      │   │      Cart       │   │   UpdatedCart   │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  id             │   │  user_id (opt)  │   │  items          │
//! │  type tag       │   │  items          │   │  total_price    │
//! │  details (JSON) │   │                 │   │  total_discount │
//! │  expiration     │   │  ┌───────────┐  │   │  final_price    │
//! │  usage_limit    │   │  │ CartItem  │  │   └─────────────────┘
//! │  used_count     │   │  │ product   │  │
//! │  users          │   │  │ quantity  │  │   ┌─────────────────┐
//! └─────────────────┘   │  │ price     │  │   │ApplicableCoupon │
//!                       │  │ discount  │  │   │ id, type,       │
//!                       │  └───────────┘  │   │ discount        │
//!                       └─────────────────┘   └─────────────────┘
//! ```
//!
//! The coupon's `details` field is an opaque JSON blob at this level;
//! [`crate::details`] decodes it into a strongly typed payload once the
//! type tag is known.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Identifiers
// =============================================================================

/// Coupon identifier, assigned by the store on creation.
pub type CouponId = u64;

/// Product identifier as carried on cart items and coupon payloads.
pub type ProductId = u64;

/// User identifier for user-restricted coupons.
pub type UserId = u64;

// =============================================================================
// Coupon Type
// =============================================================================

/// The fixed enumeration of coupon types.
///
/// Only `cart-wise`, `product-wise` and `bxgy` have registered strategies;
/// the remaining tags are reserved for planned promotion kinds. A coupon
/// carrying a reserved tag is skipped by listings and rejected with
/// "unsupported coupon type" on direct application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouponType {
    /// Discount triggered by total cart value exceeding a threshold.
    CartWise,
    /// Flat percentage discount on line items of one specific product.
    ProductWise,
    /// Buy-X-get-Y combinatorial promotion.
    Bxgy,
    /// Reserved: valid only inside a time window.
    TimeBased,
    /// Reserved: first purchase only.
    FirstTimeBuyer,
    /// Reserved: hard redemption cap semantics.
    LimitedUse,
    /// Restricted to an explicit list of users. No strategy is registered,
    /// but the applicability gate enforces the restriction.
    UserSpecific,
    /// Reserved: referral rewards.
    Referral,
}

impl CouponType {
    /// The wire tag for this type, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CouponType::CartWise => "cart-wise",
            CouponType::ProductWise => "product-wise",
            CouponType::Bxgy => "bxgy",
            CouponType::TimeBased => "time-based",
            CouponType::FirstTimeBuyer => "first-time-buyer",
            CouponType::LimitedUse => "limited-use",
            CouponType::UserSpecific => "user-specific",
            CouponType::Referral => "referral",
        }
    }
}

impl std::fmt::Display for CouponType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount rule record.
///
/// ## Lifecycle
/// - Created once via the store, which assigns `id`
/// - `used_count` is mutated only by the engine after a successful apply
/// - Never deleted by the engine itself (only via the catalog CRUD surface)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier (store-assigned; ignored on create requests).
    #[serde(default)]
    pub id: CouponId,

    /// Type tag selecting the discount strategy.
    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    /// Type-specific detail payload, opaque at this level.
    pub details: Value,

    /// If set, the coupon is inapplicable strictly after this instant.
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,

    /// Cap on total redemptions. 0 = unlimited.
    #[serde(default)]
    pub usage_limit: u32,

    /// Running redemption counter. Monotonic; stays at or below
    /// `usage_limit` when a limit is configured.
    #[serde(default)]
    pub used_count: u32,

    /// Eligible user ids. Only meaningful for `user-specific` coupons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserId>,
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart submitted for discount evaluation.
///
/// Immutable input to the engine; strategies always produce a new item
/// sequence rather than mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Cart owner, if known. Required to satisfy user-restricted coupons.
    #[serde(default)]
    pub user_id: Option<UserId>,

    /// Line items. Order is irrelevant to every computation.
    pub items: Vec<CartItem>,
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,

    /// Units of this product on this line (> 0).
    pub quantity: u32,

    /// Unit price (> 0).
    pub price: f64,

    /// Discount attributed to this line by the applied strategy.
    /// Starts at 0; never summed across coupons since exactly one coupon
    /// applies per invocation.
    #[serde(default)]
    pub total_discount: f64,
}

impl CartItem {
    /// Pre-discount subtotal for this line.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// =============================================================================
// Updated Cart
// =============================================================================

/// The discounted cart produced by applying one coupon.
///
/// `final_price` is not clamped at zero: a misconfigured coupon can drive
/// it negative, and the engine deliberately preserves that rather than
/// hiding the misconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedCart {
    /// Item sequence carrying per-line discounts.
    pub items: Vec<CartItem>,

    /// Pre-discount total (sum of price × quantity).
    pub total_price: f64,

    /// Total discount granted by the coupon.
    pub total_discount: f64,

    /// `total_price - total_discount`.
    pub final_price: f64,
}

impl UpdatedCart {
    /// Assembles an updated cart, deriving the final price.
    pub fn assemble(items: Vec<CartItem>, total_price: f64, total_discount: f64) -> Self {
        UpdatedCart {
            items,
            total_price,
            total_discount,
            final_price: total_price - total_discount,
        }
    }
}

// =============================================================================
// Applicable Coupon
// =============================================================================

/// A read-only listing entry: the discount a coupon would currently yield
/// for a given cart. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicableCoupon {
    pub coupon_id: CouponId,

    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    pub discount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
