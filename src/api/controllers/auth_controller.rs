use crate::api::state::AppState;
use crate::security::jwt::AccessClaims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Tear down session state held for the caller. The token itself is
/// discarded client-side; the persisted cart is dropped here.
pub async fn logout(State(state): State<AppState>, claims: AccessClaims) -> impl IntoResponse {
    match state.carts.clear(claims.user_id()).await {
        Ok(_) => {
            tracing::info!("User {} logged out", claims.user_id());
            (StatusCode::OK, "Logged out").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to clear cart on logout: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to log out").into_response()
        }
    }
}
