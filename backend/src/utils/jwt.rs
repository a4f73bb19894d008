use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{models::auth::AuthContext, types::UserId};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user id as a string.
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: UserId, roles: Vec<String>, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            roles,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Converts verified claims into the context used by authorization checks.
    /// A subject that is not a numeric user id yields a context without one.
    pub fn into_auth_context(self) -> AuthContext {
        let user_id = self.sub.parse::<UserId>().ok();
        AuthContext::new(user_id, self.roles)
    }
}

pub fn create_access_token(
    claims: &Claims,
    secret: &str,
    algorithm: Algorithm,
) -> Result<String, AuthError> {
    let token = encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

pub fn verify_access_token(
    token: &str,
    secret: &str,
    algorithm: Algorithm,
) -> Result<Claims, AuthError> {
    let validation = Validation::new(algorithm);
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}
