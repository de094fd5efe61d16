//! # Product-Wise Strategy
//!
//! A flat percentage off every cart line of one specific product. A cart
//! may carry multiple line entries for the same product; each matching
//! line contributes independently and records its own discount. Lines of
//! other products are untouched.

use crate::details::CouponDetails;
use crate::error::{CoreResult, EngineError};
use crate::pricing::cart_total;
use crate::strategy::DiscountStrategy;
use crate::types::{Cart, Coupon, UpdatedCart};

pub struct ProductWiseStrategy;

impl DiscountStrategy for ProductWiseStrategy {
    fn estimate_discount(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<f64> {
        let CouponDetails::ProductWise(details) = CouponDetails::decode(coupon)? else {
            return Err(EngineError::InvalidDetails);
        };

        let discount = cart
            .items
            .iter()
            .filter(|item| item.product_id == details.product_id)
            .map(|item| item.line_total() * (details.discount / 100.0))
            .sum();
        Ok(discount)
    }

    fn apply(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<UpdatedCart> {
        let CouponDetails::ProductWise(details) = CouponDetails::decode(coupon)? else {
            return Err(EngineError::InvalidDetails);
        };

        let mut items = cart.items.clone();
        let mut total_discount = 0.0;

        for item in &mut items {
            if item.product_id == details.product_id {
                let line_discount = item.line_total() * (details.discount / 100.0);
                item.total_discount = line_discount;
                total_discount += line_discount;
            }
        }

        Ok(UpdatedCart::assemble(
            items,
            cart_total(cart),
            total_discount,
        ))
    }
}
