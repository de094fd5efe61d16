//! # Engine Orchestrator
//!
//! Composes the applicability gate, the strategy registry and the store
//! collaborator into the two compute operations the request layer exposes.
//!
//! ## Data Flow
//! ```text
//! catalog records + cart
//!        │
//!        ▼
//!   Gate (filter) ──► Registry (dispatch) ──► Strategy (compute)
//!        │                                         │
//!        └────────────► Orchestrator ◄─────────────┘
//!                    aggregate / apply / usage accounting
//! ```
//!
//! The engine itself is stateless and safe to share across request
//! handlers: strategies are pure, and the store serializes its own
//! reads and writes.

use std::sync::Arc;

use crate::error::{CoreResult, EngineError};
use crate::gate;
use crate::store::{CouponStore, StoreError};
use crate::strategy::StrategyRegistry;
use crate::types::{ApplicableCoupon, Cart, Coupon, CouponId, UpdatedCart};

/// The discount engine.
pub struct CouponEngine {
    store: Arc<dyn CouponStore>,
    registry: StrategyRegistry,
}

impl CouponEngine {
    /// Builds an engine over a store with the standard strategy registry.
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        CouponEngine::with_registry(store, StrategyRegistry::standard())
    }

    /// Builds an engine with an explicit registry. Used by tests and by
    /// deployments rolling out strategies incrementally.
    pub fn with_registry(store: Arc<dyn CouponStore>, registry: StrategyRegistry) -> Self {
        CouponEngine { store, registry }
    }

    // =========================================================================
    // Catalog CRUD pass-through
    // =========================================================================
    // The engine does not add behavior here; the API layer goes through it
    // so the store stays an internal dependency.

    pub fn create_coupon(&self, coupon: Coupon) -> CoreResult<Coupon> {
        Ok(self.store.create(coupon)?)
    }

    pub fn list_coupons(&self) -> CoreResult<Vec<Coupon>> {
        Ok(self.store.list()?)
    }

    pub fn get_coupon(&self, id: CouponId) -> CoreResult<Coupon> {
        self.store.get(id).map_err(not_found_or_store)
    }

    pub fn update_coupon(&self, coupon: Coupon) -> CoreResult<Coupon> {
        self.store.update(coupon).map_err(not_found_or_store)
    }

    pub fn delete_coupon(&self, id: CouponId) -> CoreResult<()> {
        self.store.delete(id).map_err(not_found_or_store)
    }

    // =========================================================================
    // Compute Operations
    // =========================================================================

    /// Lists the coupons currently applicable to a cart, in catalog scan
    /// order, each with the discount it would yield.
    ///
    /// ## Leniency
    /// A catalog scan must not fail wholesale because of one bad entry:
    /// coupons that fail the gate, carry an unregistered type, fail
    /// payload decoding, or yield a non-positive discount are silently
    /// dropped. Only a store failure aborts the scan.
    pub fn applicable_coupons(&self, cart: &Cart) -> CoreResult<Vec<ApplicableCoupon>> {
        let coupons = self.store.list()?;

        let mut applicable = Vec::new();
        for coupon in coupons {
            if !gate::is_applicable(&coupon, cart) {
                continue;
            }
            let Some(strategy) = self.registry.resolve(coupon.coupon_type) else {
                continue;
            };
            let Ok(discount) = strategy.estimate_discount(&coupon, cart) else {
                continue;
            };
            if discount > 0.0 {
                applicable.push(ApplicableCoupon {
                    coupon_id: coupon.id,
                    coupon_type: coupon.coupon_type,
                    discount,
                });
            }
        }
        Ok(applicable)
    }

    /// Applies one coupon to a cart, returning the discounted cart.
    ///
    /// ## Strictness
    /// Every failure is surfaced: unknown id, gate rejection, unregistered
    /// type, payload decode failure, unmet strategy precondition.
    ///
    /// On success the coupon's used-count is incremented via the store
    /// exactly once - but only when a usage limit is configured, matching
    /// the gate which never inspects the counter of unlimited coupons.
    /// All computation happens before the increment, so no rollback is
    /// ever needed.
    pub fn apply_coupon(&self, id: CouponId, cart: &Cart) -> CoreResult<UpdatedCart> {
        let coupon = self.store.get(id).map_err(not_found_or_store)?;

        if !gate::is_applicable(&coupon, cart) {
            return Err(EngineError::NotApplicable);
        }

        let strategy = self
            .registry
            .resolve(coupon.coupon_type)
            .ok_or(EngineError::UnsupportedType)?;

        let updated = strategy.apply(&coupon, cart)?;

        if coupon.usage_limit > 0 {
            self.store.increment_usage(coupon.id)?;
        }

        Ok(updated)
    }
}

fn not_found_or_store(err: StoreError) -> EngineError {
    match err {
        StoreError::NotFound(_) => EngineError::NotFound,
        other => EngineError::Store(other),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
