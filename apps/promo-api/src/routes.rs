//! Router and request handlers.
//!
//! Handlers stay thin: deserialize, validate at the boundary, call the
//! engine, shape the response. All discount semantics live in promo-core.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use promo_core::validation::{validate_cart, validate_coupon};
use promo_core::{Cart, Coupon, CouponEngine, CouponId};

use crate::error::ApiResult;

/// Shared application state.
pub struct AppState {
    pub engine: CouponEngine,
}

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/coupons", post(create_coupon).get(list_coupons))
        .route(
            "/coupons/{id}",
            get(get_coupon).put(update_coupon).delete(delete_coupon),
        )
        .route("/applicable-coupons", post(applicable_coupons))
        .route("/apply-coupon/{id}", post(apply_coupon))
        .with_state(state)
}

// =============================================================================
// Catalog CRUD
// =============================================================================

async fn create_coupon(
    State(state): State<Arc<AppState>>,
    Json(coupon): Json<Coupon>,
) -> ApiResult<(StatusCode, Json<Coupon>)> {
    validate_coupon(&coupon)?;
    let created = state.engine.create_coupon(coupon)?;
    info!(id = created.id, coupon_type = %created.coupon_type, "Coupon created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_coupons(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Coupon>>> {
    Ok(Json(state.engine.list_coupons()?))
}

async fn get_coupon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CouponId>,
) -> ApiResult<Json<Coupon>> {
    Ok(Json(state.engine.get_coupon(id)?))
}

async fn update_coupon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CouponId>,
    Json(mut coupon): Json<Coupon>,
) -> ApiResult<Json<Coupon>> {
    // The path is authoritative for the id, as in any PUT-by-id.
    coupon.id = id;
    validate_coupon(&coupon)?;
    Ok(Json(state.engine.update_coupon(coupon)?))
}

async fn delete_coupon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CouponId>,
) -> ApiResult<Json<Value>> {
    state.engine.delete_coupon(id)?;
    info!(id, "Coupon deleted");
    Ok(Json(json!({ "message": "coupon deleted" })))
}

// =============================================================================
// Compute Operations
// =============================================================================

async fn applicable_coupons(
    State(state): State<Arc<AppState>>,
    Json(cart): Json<Cart>,
) -> ApiResult<Json<Value>> {
    validate_cart(&cart)?;
    let applicable = state.engine.applicable_coupons(&cart)?;
    Ok(Json(json!({ "applicable_coupons": applicable })))
}

async fn apply_coupon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CouponId>,
    Json(cart): Json<Cart>,
) -> ApiResult<Json<Value>> {
    validate_cart(&cart)?;
    let updated = state.engine.apply_coupon(id, &cart)?;
    info!(id, discount = updated.total_discount, "Coupon applied");
    Ok(Json(json!({ "updated_cart": updated })))
}
