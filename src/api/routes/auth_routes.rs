use crate::api::controllers::auth_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppState> {
    Router::new().route("/logout", post(auth_controller::logout))
}
