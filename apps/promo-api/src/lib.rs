//! # Promo API
//!
//! HTTP surface for the discount engine.
//!
//! ## Routes
//! ```text
//! POST   /coupons              create a coupon (store assigns the id)
//! GET    /coupons              full catalog
//! GET    /coupons/{id}         fetch one coupon
//! PUT    /coupons/{id}         replace a coupon
//! DELETE /coupons/{id}         remove a coupon
//! POST   /applicable-coupons   coupons applicable to the posted cart
//! POST   /apply-coupon/{id}    apply one coupon to the posted cart
//! ```
//!
//! Failures are returned as `{"error": "<message>"}` with a status code
//! chosen in [`error`].

pub mod config;
pub mod error;
pub mod routes;
