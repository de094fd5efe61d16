//! # Cart-Wise Strategy
//!
//! A percentage off the whole cart once the cart total strictly exceeds a
//! threshold. Equality does not qualify. Below the threshold the coupon is
//! simply not beneficial yet (discount 0), never an error - a cart one
//! item short of the threshold is an expected state, not a failure.
//!
//! The discount is cart-level: individual item discount fields stay
//! untouched.

use crate::details::CouponDetails;
use crate::error::{CoreResult, EngineError};
use crate::pricing::cart_total;
use crate::strategy::DiscountStrategy;
use crate::types::{Cart, Coupon, UpdatedCart};

pub struct CartWiseStrategy;

impl DiscountStrategy for CartWiseStrategy {
    fn estimate_discount(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<f64> {
        let CouponDetails::CartWise(details) = CouponDetails::decode(coupon)? else {
            return Err(EngineError::InvalidDetails);
        };

        let total = cart_total(cart);
        if total > details.threshold {
            Ok(total * (details.discount / 100.0))
        } else {
            Ok(0.0)
        }
    }

    fn apply(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<UpdatedCart> {
        let discount = self.estimate_discount(coupon, cart)?;
        Ok(UpdatedCart::assemble(
            cart.items.clone(),
            cart_total(cart),
            discount,
        ))
    }
}
