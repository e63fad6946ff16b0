use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    /// Custom claim written at token issuance from the stored flag. Absent
    /// or false means non-administrator.
    #[serde(default)]
    pub admin: bool,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, email: String, is_admin: bool) -> Self {
        Self {
            sub: user_id,
            email,
            admin: is_admin,
            exp: (Utc::now() + Duration::minutes(15)).timestamp(),
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
    fn roundtrip_preserves_admin_claim() {
        let claims = Claims::new(Uuid::now_v7(), "admin@example.com".into(), true);
        let token = encode_token(&claims, "secret").unwrap();
        let decoded = decode_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, "admin@example.com");
        assert!(decoded.admin);
    }

    #[test]
    fn missing_admin_claim_defaults_to_false() {
        // Tokens minted before the claim existed simply omit it.
        let claims = Claims::new(Uuid::now_v7(), "user@example.com".into(), false);
        let token = encode_token(&claims, "secret").unwrap();
        let decoded = decode_token(&token, "secret").unwrap();
        assert!(!decoded.admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new(Uuid::now_v7(), "user@example.com".into(), false);
        let token = encode_token(&claims, "secret").unwrap();
        assert!(decode_token(&token, "other").is_err());
    }
}
