//! # promo-store: Coupon Catalog Persistence
//!
//! File-backed implementation of the [`promo_core::store::CouponStore`]
//! contract.
//!
//! ## Architecture Position
//! ```text
//! promo-api ──► CouponEngine (promo-core)
//!                    │
//!                    ▼  CouponStore trait
//!               FileCouponStore (THIS CRATE)
//!                    │
//!                    ▼
//!               coupons.json  (pretty-printed, rewritten whole)
//! ```
//!
//! The catalog is small (a coupon campaign list, not an order log), so
//! the whole file is held in memory and rewritten on every mutation. One
//! mutex guards every load-mutate-persist sequence; see
//! [`file::FileCouponStore`] for the locking discipline.

pub mod file;

pub use file::FileCouponStore;
