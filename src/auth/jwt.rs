use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long an issued token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(admin_id: Uuid, username: String) -> Self {
        let now = Utc::now();
        Self {
            sub: admin_id,
            username,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_claims() {
        let id = Uuid::now_v7();
        let claims = Claims::new(id, "admin".to_string());
        let token = encode_token(&claims, "test-secret").unwrap();
        let decoded = decode_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.sub, id);
        assert_eq!(decoded.username, "admin");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new(Uuid::now_v7(), "admin".to_string());
        let token = encode_token(&claims, "test-secret").unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Backdate well past the default validation leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::now_v7(),
            username: "admin".to_string(),
            iat: (now - Duration::hours(25)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode_token(&claims, "test-secret").unwrap();
        assert!(decode_token(&token, "test-secret").is_err());
    }
}
