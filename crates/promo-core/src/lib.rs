//! # promo-core: Pure Discount Logic for Promo Engine
//!
//! This crate is the **heart** of the system. It decides which coupons
//! currently apply to a shopping cart and computes the discounted cart
//! that results from applying one of them - all as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  HTTP API (promo-api)                                               │
//! │      applicable-coupons, apply-coupon, catalog CRUD                 │
//! └──────────────────────────────┬──────────────────────────────────────┘
//! ┌──────────────────────────────▼──────────────────────────────────────┐
//! │               ★ promo-core (THIS CRATE) ★                           │
//! │                                                                     │
//! │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌──────────────────────┐ │
//! │   │  types  │  │  gate   │  │ strategy │  │       engine         │ │
//! │   │ Coupon  │  │ expiry  │  │ cart-wise│  │ list applicable      │ │
//! │   │  Cart   │  │ usage   │  │ product  │  │ apply one coupon     │ │
//! │   │ Updated │  │ user    │  │ bxgy     │  │ usage accounting     │ │
//! │   └─────────┘  └─────────┘  └──────────┘  └──────────────────────┘ │
//! │                                                                     │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                │
//! └──────────────────────────────┬──────────────────────────────────────┘
//! ┌──────────────────────────────▼──────────────────────────────────────┐
//! │  CouponStore trait ──► promo-store (JSON file catalog)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Coupon, Cart, UpdatedCart, ...)
//! - [`details`] - Typed per-coupon-type payloads and their decode boundary
//! - [`pricing`] - Cart pricer (pre-discount totals)
//! - [`gate`] - Applicability gate (expiration, usage cap, user restriction)
//! - [`strategy`] - Discount strategies and the type-tag registry
//! - [`store`] - The coupon catalog contract implemented by promo-store
//! - [`engine`] - Orchestrator tying gate + registry + store together
//! - [`validation`] - Request-boundary input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every strategy computation is deterministic
//! 2. **No I/O**: The catalog is an injected `CouponStore`, never reached into
//! 3. **One coupon per invocation**: Stacking is not supported
//! 4. **Explicit Errors**: All errors are typed enum variants, never strings

// =============================================================================
// Module Declarations
// =============================================================================

pub mod details;
pub mod engine;
pub mod error;
pub mod gate;
pub mod pricing;
pub mod store;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::CouponEngine;
pub use error::{CoreResult, EngineError, ValidationError};
pub use store::{CouponStore, StoreError};
pub use types::*;
