//! # Cart Pricer
//!
//! Pre-discount cart totals. Used by every strategy and by the
//! orchestrator to populate result totals.

use crate::types::Cart;

/// Computes the pre-discount total of a cart: Σ(price × quantity).
///
/// Pure function, no failure mode. Per-line discounts already recorded on
/// the items are deliberately ignored; the total is always the undiscounted
/// one.
pub fn cart_total(cart: &Cart) -> f64 {
    cart.items.iter().map(|item| item.line_total()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartItem;

    fn item(product_id: u64, quantity: u32, price: f64) -> CartItem {
        CartItem {
            product_id,
            quantity,
            price,
            total_discount: 0.0,
        }
    }

    #[test]
    fn test_cart_total_sums_lines() {
        let cart = Cart {
            user_id: None,
            items: vec![item(1, 2, 100.0), item(2, 4, 250.0)],
        };
        assert_eq!(cart_total(&cart), 1200.0);
    }

    #[test]
    fn test_cart_total_empty_cart_is_zero() {
        let cart = Cart {
            user_id: None,
            items: vec![],
        };
        assert_eq!(cart_total(&cart), 0.0);
    }

    #[test]
    fn test_cart_total_ignores_recorded_discounts() {
        let mut discounted = item(1, 2, 100.0);
        discounted.total_discount = 50.0;
        let cart = Cart {
            user_id: None,
            items: vec![discounted],
        };
        assert_eq!(cart_total(&cart), 200.0);
    }
}
