use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum APIErrors {
    Unauthorized,
    TokenExpired,
}

impl std::error::Error for APIErrors {}

impl std::fmt::Display for APIErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            APIErrors::Unauthorized => write!(f, "Unauthorized"),
            APIErrors::TokenExpired => write!(f, "Token expired"),
        }
    }
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
