//! # Discount Strategies
//!
//! One strategy per coupon type with discount semantics, dispatched
//! through a registry keyed by type tag.
//!
//! ## Dispatch Model
//! ```text
//! CouponType ──► StrategyRegistry::resolve ──► &dyn DiscountStrategy
//!                        │
//!                        └── unknown tag ──► None
//!                            (listings skip, apply fails loudly)
//! ```
//!
//! Adding a type is a closed, explicit registration step in
//! [`StrategyRegistry::standard`] - never runtime reflection.

use std::collections::HashMap;

use crate::error::CoreResult;
use crate::types::{Cart, Coupon, CouponType, UpdatedCart};

pub mod bxgy;
pub mod cart_wise;
pub mod product_wise;

pub use bxgy::BxgyStrategy;
pub use cart_wise::CartWiseStrategy;
pub use product_wise::ProductWiseStrategy;

// =============================================================================
// Strategy Trait
// =============================================================================

/// A per-type discount algorithm.
///
/// Both operations are pure functions over their inputs; neither touches
/// the store or any other shared state, so strategies are freely callable
/// from concurrent request handlers.
pub trait DiscountStrategy: Send + Sync {
    /// Computes the discount amount this coupon would currently yield.
    /// Read-only; used by the listing path. A coupon whose type-specific
    /// precondition is unmet yields `Ok(0.0)`, not an error.
    fn estimate_discount(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<f64>;

    /// Produces the discounted cart. Unlike estimation, an unmet
    /// type-specific precondition is an explicit failure here
    /// (`EngineError::ConditionsNotMet`).
    fn apply(&self, coupon: &Coupon, cart: &Cart) -> CoreResult<UpdatedCart>;
}

// =============================================================================
// Strategy Registry
// =============================================================================

/// Maps coupon type tags to strategy instances.
pub struct StrategyRegistry {
    strategies: HashMap<CouponType, Box<dyn DiscountStrategy>>,
}

impl StrategyRegistry {
    /// An empty registry. Useful for tests exercising unknown-type paths.
    pub fn new() -> Self {
        StrategyRegistry {
            strategies: HashMap::new(),
        }
    }

    /// The production registry: cart-wise, product-wise and bxgy.
    /// Reserved type tags stay unregistered until their strategies land.
    pub fn standard() -> Self {
        let mut registry = StrategyRegistry::new();
        registry.register(CouponType::CartWise, Box::new(CartWiseStrategy));
        registry.register(CouponType::ProductWise, Box::new(ProductWiseStrategy));
        registry.register(CouponType::Bxgy, Box::new(BxgyStrategy));
        registry
    }

    /// Registers a strategy for a type tag, replacing any previous one.
    pub fn register(&mut self, coupon_type: CouponType, strategy: Box<dyn DiscountStrategy>) {
        self.strategies.insert(coupon_type, strategy);
    }

    /// Resolves the strategy for a type tag. Unknown/unregistered tags
    /// resolve to `None`.
    pub fn resolve(&self, coupon_type: CouponType) -> Option<&dyn DiscountStrategy> {
        self.strategies.get(&coupon_type).map(|s| s.as_ref())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        StrategyRegistry::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_resolves_implemented_types() {
        let registry = StrategyRegistry::standard();
        assert!(registry.resolve(CouponType::CartWise).is_some());
        assert!(registry.resolve(CouponType::ProductWise).is_some());
        assert!(registry.resolve(CouponType::Bxgy).is_some());
    }

    #[test]
    fn test_reserved_types_resolve_to_none() {
        let registry = StrategyRegistry::standard();
        assert!(registry.resolve(CouponType::TimeBased).is_none());
        assert!(registry.resolve(CouponType::FirstTimeBuyer).is_none());
        assert!(registry.resolve(CouponType::LimitedUse).is_none());
        assert!(registry.resolve(CouponType::UserSpecific).is_none());
        assert!(registry.resolve(CouponType::Referral).is_none());
    }
}
