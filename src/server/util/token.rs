//! Bearer token issuance and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims carried by an access token.
///
/// `sub` is the user id as a string; `exp` is a unix timestamp checked by
/// validation on decode.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Signing and verification key material plus the configured token lifetime.
///
/// Built once at startup from the configured secret and cloned into every
/// request through the application state.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expire_minutes: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expire_minutes,
        }
    }

    /// Issues a signed, time-limited token for the given user.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::minutes(self.expire_minutes)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign access token: {}", e)))
    }

    /// Validates a token's signature and expiry and extracts the user id.
    ///
    /// # Returns
    /// - `Ok(i32)` - The authenticated user id
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or a
    ///   non-numeric subject
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_roundtrip() {
        let keys = TokenKeys::new("test-secret", 60);

        let token = keys.issue(42).unwrap();
        let user_id = keys.verify(&token).unwrap();

        assert_eq!(user_id, 42);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let keys = TokenKeys::new("test-secret", 60);
        let other = TokenKeys::new("other-secret", 60);

        let token = other.issue(42).unwrap();

        assert!(matches!(keys.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_expired_token() {
        let keys = TokenKeys::new("test-secret", -5);

        let token = keys.issue(42).unwrap();

        assert!(matches!(keys.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn rejects_garbage_token() {
        let keys = TokenKeys::new("test-secret", 60);

        assert!(matches!(
            keys.verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
    }
}
