#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    TokenExpired,
    TokenCreationError,
    InvalidToken,
}

impl std::error::Error for AuthError {}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::TokenExpired => write!(f, "Authentication token has expired."),
            AuthError::TokenCreationError => write!(f, "Token creation failed"),
            AuthError::InvalidToken => write!(f, "Invalid token credentials provided."),
        }
    }
}
