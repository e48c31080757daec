/**
 * Session Tokens
 *
 * This module handles JWT token generation and validation. Tokens are
 * signed with the server-side secret from configuration and embed the
 * user id as the subject claim.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 30 days
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID), embedded as the subject claim
/// * `secret` - Server-side signing secret
///
/// # Returns
/// JWT token string
pub fn create_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string
/// * `secret` - Server-side signing secret
///
/// # Returns
/// Decoded claims or error (malformed, expired, or signature-invalid)
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_create_token() {
        let user_id = Uuid::new_v4();
        let result = create_token(user_id, SECRET);
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, SECRET).unwrap();

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let result = verify_token("invalid.token.here", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_empty_token() {
        let result = verify_token("", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, SECRET).unwrap();

        let result = verify_token(&token, "other-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_two_tokens_for_same_user_both_verify() {
        let user_id = Uuid::new_v4();
        let first = create_token(user_id, SECRET).unwrap();
        let second = create_token(user_id, SECRET).unwrap();

        assert_eq!(verify_token(&first, SECRET).unwrap().sub, user_id.to_string());
        assert_eq!(verify_token(&second, SECRET).unwrap().sub, user_id.to_string());
    }
}
