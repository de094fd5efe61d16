//! Integration tests for the coupon HTTP API.
//!
//! Each test builds the full router over a throwaway catalog file and
//! drives it in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use promo_api::routes::{create_router, AppState};
use promo_core::CouponEngine;
use promo_store::FileCouponStore;

/// A router over a fresh catalog. The TempDir must outlive the test.
fn test_app(dir: &tempfile::TempDir) -> axum::Router {
    let store = Arc::new(FileCouponStore::open(dir.path().join("coupons.json")).unwrap());
    let state = Arc::new(AppState {
        engine: CouponEngine::new(store),
    });
    create_router(state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(value) => builder
            .body(Body::from(serde_json::to_string(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(json!({}));

    (status, body)
}

fn cart_wise_coupon() -> Value {
    json!({
        "type": "cart-wise",
        "details": { "threshold": 1000.0, "discount": 10.0 }
    })
}

fn sample_cart() -> Value {
    // Total 1200: 2×100 + 4×250.
    json!({
        "items": [
            { "product_id": 1, "quantity": 2, "price": 100.0 },
            { "product_id": 2, "quantity": 4, "price": 250.0 }
        ]
    })
}

#[tokio::test]
async fn test_create_and_fetch_coupon() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, created) = send(&app, "POST", "/coupons", Some(cart_wise_coupon())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["type"], "cart-wise");

    let (status, fetched) = send(&app, "GET", "/coupons/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["details"]["threshold"], 1000.0);

    let (status, listed) = send(&app, "GET", "/coupons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_unknown_coupon_is_404() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send(&app, "GET", "/coupons/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "coupon not found");
}

#[tokio::test]
async fn test_update_and_delete_coupon() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);
    send(&app, "POST", "/coupons", Some(cart_wise_coupon())).await;

    let replacement = json!({
        "type": "cart-wise",
        "details": { "threshold": 500.0, "discount": 5.0 },
        "usage_limit": 2
    });
    let (status, updated) = send(&app, "PUT", "/coupons/1", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["details"]["threshold"], 500.0);
    assert_eq!(updated["usage_limit"], 2);

    let (status, body) = send(&app, "DELETE", "/coupons/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "coupon deleted");

    let (status, _) = send(&app, "GET", "/coupons/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_applicable_coupons_listing() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    // Qualifies (threshold 1000 < total 1200).
    send(&app, "POST", "/coupons", Some(cart_wise_coupon())).await;
    // Does not qualify (threshold 2000).
    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "cart-wise",
            "details": { "threshold": 2000.0, "discount": 10.0 }
        })),
    )
    .await;
    // Reserved type: silently skipped by the listing.
    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({ "type": "referral", "details": {} })),
    )
    .await;

    let (status, body) = send(&app, "POST", "/applicable-coupons", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::OK);

    let applicable = body["applicable_coupons"].as_array().unwrap();
    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0]["coupon_id"], 1);
    assert_eq!(applicable[0]["type"], "cart-wise");
    assert_eq!(applicable[0]["discount"], 120.0);
}

#[tokio::test]
async fn test_apply_cart_wise_coupon() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);
    send(&app, "POST", "/coupons", Some(cart_wise_coupon())).await;

    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::OK);

    let updated = &body["updated_cart"];
    assert_eq!(updated["total_price"], 1200.0);
    assert_eq!(updated["total_discount"], 120.0);
    assert_eq!(updated["final_price"], 1080.0);
}

#[tokio::test]
async fn test_apply_bxgy_coupon_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    // Buy 2 of product 1, get 1 of product 2 free.
    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "bxgy",
            "details": {
                "buy_products": [{ "product_id": 1, "quantity": 2 }],
                "get_products": [{ "product_id": 2, "quantity": 1 }],
                "repetition_limit": 1
            }
        })),
    )
    .await;

    let cart = json!({
        "items": [
            { "product_id": 1, "quantity": 5, "price": 30.0 },
            { "product_id": 2, "quantity": 1, "price": 50.0 }
        ]
    });

    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(cart)).await;
    assert_eq!(status, StatusCode::OK);

    let updated = &body["updated_cart"];
    assert_eq!(updated["total_discount"], 50.0);
    assert_eq!(updated["items"][1]["total_discount"], 50.0);
}

#[tokio::test]
async fn test_apply_unmet_bxgy_conditions_is_400() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "bxgy",
            "details": {
                "buy_products": [{ "product_id": 9, "quantity": 2 }],
                "get_products": [{ "product_id": 2, "quantity": 1 }]
            }
        })),
    )
    .await;

    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "coupon conditions not met");
}

#[tokio::test]
async fn test_apply_unknown_coupon_is_404() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send(&app, "POST", "/apply-coupon/42", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "coupon not found");
}

#[tokio::test]
async fn test_apply_expired_coupon_is_400() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    let expired = chrono::Utc::now() - chrono::Duration::days(1);
    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "cart-wise",
            "details": { "threshold": 1000.0, "discount": 10.0 },
            "expiration_date": expired.to_rfc3339()
        })),
    )
    .await;

    // Excluded from listing...
    let (_, listing) = send(&app, "POST", "/applicable-coupons", Some(sample_cart())).await;
    assert!(listing["applicable_coupons"].as_array().unwrap().is_empty());

    // ...and rejected on direct apply.
    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "coupon is not applicable");
}

#[tokio::test]
async fn test_usage_limit_enforced_across_applies() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "cart-wise",
            "details": { "threshold": 1000.0, "discount": 10.0 },
            "usage_limit": 1
        })),
    )
    .await;

    let (status, _) = send(&app, "POST", "/apply-coupon/1", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::OK);

    // The single permitted redemption is spent.
    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(sample_cart())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "coupon is not applicable");

    let (_, coupon) = send(&app, "GET", "/coupons/1", None).await;
    assert_eq!(coupon["used_count"], 1);
}

#[tokio::test]
async fn test_invalid_cart_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);
    send(&app, "POST", "/coupons", Some(cart_wise_coupon())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/applicable-coupons",
        Some(json!({ "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "items is required");

    let bad_price = json!({
        "items": [{ "product_id": 1, "quantity": 1, "price": 0.0 }]
    });
    let (status, body) = send(&app, "POST", "/apply-coupon/1", Some(bad_price)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price must be positive");
}

#[tokio::test]
async fn test_create_coupon_with_inconsistent_usage_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send(
        &app,
        "POST",
        "/coupons",
        Some(json!({
            "type": "cart-wise",
            "details": { "threshold": 1000.0, "discount": 10.0 },
            "usage_limit": 1,
            "used_count": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "used_count has invalid value: exceeds usage_limit");
}
