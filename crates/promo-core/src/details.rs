//! # Typed Detail Payloads
//!
//! Each coupon carries an opaque JSON `details` blob whose shape depends
//! on the coupon's type tag. This module is the single decode boundary:
//! the blob is decoded into a tagged union here, and a shape mismatch
//! yields [`EngineError::InvalidDetails`] rather than being deferred to
//! each strategy.
//!
//! ## Payload Shapes
//! ```text
//! cart-wise     { "threshold": 1000.0, "discount": 10.0 }
//! product-wise  { "product_id": 1, "discount": 20.0 }
//! bxgy          { "buy_products": [{ "product_id": 1, "quantity": 2 }],
//!                 "get_products": [{ "product_id": 3, "quantity": 1 }],
//!                 "repetition_limit": 2 }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, EngineError};
use crate::types::{Coupon, CouponType, ProductId};

// =============================================================================
// Per-Type Payloads
// =============================================================================

/// Cart-wide threshold discount: `discount` percent off the whole cart,
/// granted only when the cart total strictly exceeds `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartWiseDetails {
    /// Minimum cart total. Equality does not qualify.
    pub threshold: f64,
    /// Percentage discount (10.0 = 10%).
    pub discount: f64,
}

/// Per-product percentage discount on every line of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWiseDetails {
    pub product_id: ProductId,
    /// Percentage discount (20.0 = 20%).
    pub discount: f64,
}

/// A product/quantity pair in a buy-x-get-y rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Buy-x-get-y promotion: buying the `buy_products` quantities grants the
/// `get_products` quantities at full-price discount, repeatable up to
/// `repetition_limit` times (0 = unlimited).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BxgyDetails {
    pub buy_products: Vec<ProductQuantity>,
    pub get_products: Vec<ProductQuantity>,
    #[serde(default)]
    pub repetition_limit: u32,
}

// =============================================================================
// Decode Boundary
// =============================================================================

/// The decoded, strongly typed form of a coupon's detail payload.
///
/// One case per coupon type with discount semantics. Reserved type tags
/// have no payload shape yet and decode to
/// [`EngineError::UnsupportedType`].
#[derive(Debug, Clone, PartialEq)]
pub enum CouponDetails {
    CartWise(CartWiseDetails),
    ProductWise(ProductWiseDetails),
    Bxgy(BxgyDetails),
}

impl CouponDetails {
    /// Decodes the coupon's opaque payload according to its type tag.
    ///
    /// ## Errors
    /// - [`EngineError::InvalidDetails`] when the payload shape does not
    ///   match the tag
    /// - [`EngineError::UnsupportedType`] for reserved type tags
    pub fn decode(coupon: &Coupon) -> CoreResult<Self> {
        match coupon.coupon_type {
            CouponType::CartWise => decode_payload(coupon).map(CouponDetails::CartWise),
            CouponType::ProductWise => decode_payload(coupon).map(CouponDetails::ProductWise),
            CouponType::Bxgy => decode_payload(coupon).map(CouponDetails::Bxgy),
            _ => Err(EngineError::UnsupportedType),
        }
    }
}

fn decode_payload<T: DeserializeOwned>(coupon: &Coupon) -> CoreResult<T> {
    serde_json::from_value(coupon.details.clone()).map_err(|_| EngineError::InvalidDetails)
}

// =============================================================================
// Unit Tests
// =============================================================================
