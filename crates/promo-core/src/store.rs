//! # Coupon Store Contract
//!
//! The coupon catalog is the only mutable shared resource in the system,
//! and it is owned entirely by the store collaborator. The engine treats
//! the store as an opaque dependency injected at construction and reaches
//! it only through this trait.
//!
//! ## Consistency Discipline
//! Implementations must serialize their own reads and writes (promo-store
//! holds one lock around every load-mutate-persist sequence). The engine
//! performs a read followed, on the apply path, by a separate
//! `increment_usage` write with **no atomicity spanning the two**:
//! concurrent applies against a near-exhausted coupon can race past the
//! usage-limit check before either increment lands. A store that needs
//! strict enforcement can make `increment_usage` a compare-and-increment
//! that fails at the limit, without any engine change.

use thiserror::Error;

use crate::types::{Coupon, CouponId};

// =============================================================================
// Store Error
// =============================================================================

/// Catalog persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No coupon with this id exists in the catalog.
    #[error("coupon not found: {0}")]
    NotFound(CouponId),

    /// The catalog lock was poisoned by a panicking writer.
    #[error("coupon catalog lock poisoned")]
    LockPoisoned,

    /// The catalog could not be read at startup.
    #[error("failed to load coupon catalog: {0}")]
    Load(String),

    /// A mutation could not be persisted.
    #[error("failed to persist coupon catalog: {0}")]
    Persist(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Store Trait
// =============================================================================

/// The store collaborator contract consumed by the engine and the API
/// layer.
pub trait CouponStore: Send + Sync {
    /// Adds a coupon to the catalog, assigning it a fresh unique id.
    /// Any id carried on the input is ignored.
    fn create(&self, coupon: Coupon) -> StoreResult<Coupon>;

    /// Returns a snapshot of the full catalog in stable scan order.
    fn list(&self) -> StoreResult<Vec<Coupon>>;

    /// Fetches a coupon by id.
    fn get(&self, id: CouponId) -> StoreResult<Coupon>;

    /// Replaces the coupon with the same id.
    fn update(&self, coupon: Coupon) -> StoreResult<Coupon>;

    /// Removes a coupon from the catalog.
    fn delete(&self, id: CouponId) -> StoreResult<()>;

    /// Increments the coupon's used-count by one. Called by the engine
    /// exactly once per successful apply of a usage-limited coupon.
    fn increment_usage(&self, id: CouponId) -> StoreResult<()>;
}
