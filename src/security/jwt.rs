use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

/// Verifies shopper tokens issued by the account service. Both sides share
/// the HMAC secret.
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(secret: impl Into<String>, expiration_minutes: u64) -> Self {
        JwtService {
            secret: secret.into(),
            expiration_minutes,
        }
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String, AuthError> {
        let curr_time = chrono::Utc::now().timestamp() as usize;

        let claims = AccessClaims {
            sub: user_id.to_string(),
            iat: curr_time,
            exp: curr_time + (self.expiration_minutes * 60) as usize,
        };

        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)?;

        tracing::debug!("Token generated for user {}", user_id);

        Ok(token)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}

impl AccessClaims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}
