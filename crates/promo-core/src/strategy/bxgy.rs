//! # Buy-X-Get-Y Strategy
//!
//! "Buy N of A, get M of B free", generalized to multiple simultaneous
//! buy and get conditions and repeatable application.
//!
//! ## Algorithm
//! ```text
//! 1. k = min over buy-pairs of floor(qty_in_cart(buy.product) / buy.quantity)
//!        a zero required quantity (or an empty buy set) yields k = 0
//! 2. k == 0      estimate -> 0, apply -> "coupon conditions not met"
//! 3. limit > 0   k = min(k, repetition_limit)
//! 4. per get-pair: eligible = min(get.quantity × k, qty_in_cart(get.product))
//!                  discount += eligible × unit price of that cart line
//! 5. get-products absent from the cart contribute 0
//! ```
//!
//! The bottleneck model in step 1 means every buy condition must be
//! satisfied simultaneously the same number of times. Step 4 caps the
//! discount at what is actually present in the cart, and the "free" units
//! are discounted at their full cart price - there is no separate
//! promotional price.
//!
//! Quantity lookups resolve to the first cart line carrying the product;
//! estimation and application share that rule so the listed discount and
//! the applied discount always agree, even for carts with duplicate lines
//! of a get-product.

use crate::details::{BxgyDetails, CouponDetails};
use crate::error::{CoreResult, EngineError};
use crate::pricing::cart_total;
use crate::strategy::DiscountStrategy;
use crate::types::{Cart, CartItem, Coupon, ProductId, UpdatedCart};

pub struct BxgyStrategy;

impl DiscountStrategy for BxgyStrategy {
    fn estimate_discount(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<f64> {
        let details = decode(coupon)?;

        let repetitions = times_applicable(&details, cart);
        if repetitions == 0 {
            return Ok(0.0);
        }
        let repetitions = clamp_to_limit(repetitions, details.repetition_limit);

        let discount = details
            .get_products
            .iter()
            .filter_map(|get| first_line(cart, get.product_id).map(|line| (get, line)))
            .map(|(get, line)| f64::from(eligible_quantity(get.quantity, repetitions, line.quantity)) * line.price)
            .sum();
        Ok(discount)
    }

    fn apply(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<UpdatedCart> {
        let details = decode(coupon)?;

        let repetitions = times_applicable(&details, cart);
        if repetitions == 0 {
            return Err(EngineError::ConditionsNotMet);
        }
        let repetitions = clamp_to_limit(repetitions, details.repetition_limit);

        let mut items = cart.items.clone();
        let mut total_discount = 0.0;

        for get in &details.get_products {
            // Same first-line rule as estimation.
            let Some(index) = items.iter().position(|i| i.product_id == get.product_id) else {
                continue;
            };
            let line = &mut items[index];
            let line_discount =
                f64::from(eligible_quantity(get.quantity, repetitions, line.quantity)) * line.price;
            line.total_discount += line_discount;
            total_discount += line_discount;
        }

        Ok(UpdatedCart::assemble(
            items,
            cart_total(cart),
            total_discount,
        ))
    }
}

fn decode(coupon: &Coupon) -> CoreResult<BxgyDetails> {
    match CouponDetails::decode(coupon)? {
        CouponDetails::Bxgy(details) => Ok(details),
        _ => Err(EngineError::InvalidDetails),
    }
}

/// How many times the rule applies before the repetition limit: the
/// minimum over buy-pairs of floor(cart quantity / required quantity).
///
/// A rule with no buy-pairs, or any pair requiring quantity 0, is
/// malformed and yields zero applications rather than an error.
fn times_applicable(details: &BxgyDetails, cart: &Cart) -> u32 {
    if details.buy_products.is_empty() {
        return 0;
    }

    let mut repetitions = u32::MAX;
    for buy in &details.buy_products {
        if buy.quantity == 0 {
            return 0;
        }
        let in_cart = quantity_in_cart(cart, buy.product_id);
        repetitions = repetitions.min(in_cart / buy.quantity);
    }
    repetitions
}

fn clamp_to_limit(repetitions: u32, limit: u32) -> u32 {
    if limit > 0 {
        repetitions.min(limit)
    } else {
        repetitions
    }
}

/// Units of a get-product eligible for discount: never more than the cart
/// actually holds.
fn eligible_quantity(get_quantity: u32, repetitions: u32, in_cart: u32) -> u32 {
    let granted = u64::from(get_quantity) * u64::from(repetitions);
    granted.min(u64::from(in_cart)) as u32
}

fn quantity_in_cart(cart: &Cart, product_id: ProductId) -> u32 {
    first_line(cart, product_id).map_or(0, |line| line.quantity)
}

fn first_line(cart: &Cart, product_id: ProductId) -> Option<&CartItem> {
    cart.items.iter().find(|i| i.product_id == product_id)
}
