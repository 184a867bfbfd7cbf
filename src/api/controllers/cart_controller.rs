use crate::api::controllers::dto::cart_dto::{
    AddToCartRequest, CartResponse, CartSummaryResponse, UpdateQuantityRequest,
};
use crate::api::state::AppState;
use crate::data::models::cart::Cart;
use crate::security::jwt::AccessClaims;
use crate::services::cart_service::CartService;
use crate::services::errors::CartServiceError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn error_response(err: CartServiceError) -> Response {
    match err {
        CartServiceError::InvalidQuantity => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Quantity must be at least 1").into_response()
        }
        CartServiceError::LineNotFound => {
            (StatusCode::NOT_FOUND, "Product not in cart").into_response()
        }
        CartServiceError::CatalogUnavailable(e) => {
            tracing::error!("Catalog unavailable while pricing cart: {}", e);
            (StatusCode::BAD_GATEWAY, "Catalog unavailable").into_response()
        }
        CartServiceError::StoreError(e) => {
            tracing::error!("Cart store failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Cart store error").into_response()
        }
    }
}

fn cart_response(result: Result<Cart, CartServiceError>) -> Response {
    match result {
        Ok(cart) => (StatusCode::OK, Json(CartResponse::from(cart))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get the priced cart of the caller
pub async fn get_cart(State(state): State<AppState>, claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());

    match service.get_summary(claims.user_id()).await {
        Ok(summary) => (StatusCode::OK, Json(CartSummaryResponse::from(summary))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Add a product to the cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    claims: AccessClaims,
    Json(payload): Json<AddToCartRequest>,
) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());

    match service
        .add_item(claims.user_id(), &payload.product_id, payload.quantity)
        .await
    {
        Ok(cart) => (StatusCode::CREATED, Json(CartResponse::from(cart))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Set the quantity of a cart line
pub async fn update_quantity(
    State(state): State<AppState>,
    claims: AccessClaims,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());

    cart_response(
        service
            .set_quantity(claims.user_id(), &product_id, payload.quantity)
            .await,
    )
}

pub async fn increment_quantity(
    State(state): State<AppState>,
    claims: AccessClaims,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());
    cart_response(service.increment(claims.user_id(), &product_id).await)
}

pub async fn decrement_quantity(
    State(state): State<AppState>,
    claims: AccessClaims,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());
    cart_response(service.decrement(claims.user_id(), &product_id).await)
}

/// Remove a line regardless of its quantity
pub async fn remove_from_cart(
    State(state): State<AppState>,
    claims: AccessClaims,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());
    cart_response(service.remove_item(claims.user_id(), &product_id).await)
}

pub async fn clear_cart(State(state): State<AppState>, claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new(state.carts.as_ref(), state.catalog.as_ref());

    match service.clear(claims.user_id()).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
