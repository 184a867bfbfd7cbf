mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bigdecimal::BigDecimal;
use common::{FakeCatalog, app_state, product, token_for};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use storefront_lib::api::controllers::dto::cart_dto::{CartResponse, CartSummaryResponse};
use storefront_lib::api::server::app;
use tower::ServiceExt;

fn test_app() -> Router {
    let catalog = FakeCatalog::with_products(vec![product("a", 10), product("b", 4)]);
    app(app_state(Arc::new(catalog)))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_cart_requires_token() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/api/v1/cart", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/v1/cart", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_and_get_cart_summary() {
    let app = test_app();
    let token = token_for("user-1");

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/cart",
        Some(&token),
        Some(json!({ "productId": "a", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart.user_id, "user-1");
    assert_eq!(cart.items.len(), 1);

    let (status, body) = send(&app, "GET", "/api/v1/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let summary: CartSummaryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.subtotal, BigDecimal::from(20));
    assert_eq!(summary.shipping, BigDecimal::from(0));
    assert_eq!(summary.total, BigDecimal::from(20));
}

#[tokio::test]
async fn test_summary_skips_unknown_product() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "a" }))).await;
    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "gone" }))).await;

    let (status, body) = send(&app, "GET", "/api/v1/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let summary: CartSummaryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].product.id, "a");
    assert_eq!(summary.subtotal, BigDecimal::from(10));
}

#[tokio::test]
async fn test_update_quantity_rejects_zero() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "b", "quantity": 3 }))).await;

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/v1/cart/b",
        Some(&token),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/v1/cart/b",
        Some(&token),
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart.items[0].quantity, 5);
}

#[tokio::test]
async fn test_increment_and_decrement() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "a" }))).await;

    let (status, body) = send(&app, "POST", "/api/v1/cart/a/decrement", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart.items[0].quantity, 1);

    let (_, body) = send(&app, "POST", "/api/v1/cart/a/increment", Some(&token), None).await;
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart.items[0].quantity, 2);

    let (_, body) = send(&app, "POST", "/api/v1/cart/a/decrement", Some(&token), None).await;
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(cart.items[0].quantity, 1);
}

#[tokio::test]
async fn test_remove_line() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "a", "quantity": 4 }))).await;

    let (status, body) = send(&app, "DELETE", "/api/v1/cart/a", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let cart: CartResponse = serde_json::from_slice(&body).unwrap();
    assert!(cart.items.is_empty());

    let (status, _) = send(&app, "DELETE", "/api/v1/cart/a", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let app = test_app();
    let alice = token_for("alice");
    let bob = token_for("bob");

    send(&app, "POST", "/api/v1/cart", Some(&alice), Some(json!({ "productId": "a" }))).await;

    let (_, body) = send(&app, "GET", "/api/v1/cart", Some(&bob), None).await;
    let summary: CartSummaryResponse = serde_json::from_slice(&body).unwrap();
    assert!(summary.rows.is_empty());
}

#[tokio::test]
async fn test_clear_cart() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "a" }))).await;

    let (status, _) = send(&app, "DELETE", "/api/v1/cart", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/v1/cart", Some(&token), None).await;
    let summary: CartSummaryResponse = serde_json::from_slice(&body).unwrap();
    assert!(summary.rows.is_empty());
    assert_eq!(summary.total, BigDecimal::from(0));
}

#[tokio::test]
async fn test_logout_clears_cart() {
    let app = test_app();
    let token = token_for("user-1");

    send(&app, "POST", "/api/v1/cart", Some(&token), Some(json!({ "productId": "b", "quantity": 2 }))).await;

    let (status, _) = send(&app, "POST", "/api/v1/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/v1/cart", Some(&token), None).await;
    let summary: CartSummaryResponse = serde_json::from_slice(&body).unwrap();
    assert!(summary.rows.is_empty());
}
