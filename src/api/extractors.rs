use crate::api::errors::APIErrors;
use crate::api::state::AppState;
use crate::security::errors::AuthError;
use crate::security::jwt::AccessClaims;
use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

impl FromRequestParts<AppState> for AccessClaims {
    type Rejection = APIErrors;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::error!("Invalid authorization header");
                APIErrors::Unauthorized
            })?;

        state.jwt.decode_token(bearer.token()).map_err(|e| {
            tracing::error!("Token decoding error: {:?}", e);
            match e {
                AuthError::TokenExpired => APIErrors::TokenExpired,
                _ => APIErrors::Unauthorized,
            }
        })
    }
}
