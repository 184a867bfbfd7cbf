use crate::api::controllers::cart_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{delete, get, patch, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_controller::get_cart))
        .route("/", post(cart_controller::add_to_cart))
        .route("/", delete(cart_controller::clear_cart))
        .route("/{product_id}", patch(cart_controller::update_quantity))
        .route("/{product_id}", delete(cart_controller::remove_from_cart))
        .route("/{product_id}/increment", post(cart_controller::increment_quantity))
        .route("/{product_id}/decrement", post(cart_controller::decrement_quantity))
}
