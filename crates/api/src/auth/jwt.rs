//! Bearer token signing and verification.
//!
//! Tokens are HS256 JWTs. This service only verifies them in normal operation;
//! [`JwtConfig::issue`] is used by operator tooling and the test suite.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use villa_core::roles::Role;
use villa_core::types::DbId;

/// Token lifetime used when `JWT_ACCESS_EXPIRY_MINS` is unset.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

/// Payload of a villa API access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Caller id as issued by the identity provider.
    pub sub: DbId,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 15).
    ///
    /// # Panics
    ///
    /// On a missing or empty secret, or an expiry that is not an integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set to a non-empty value");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|_| panic!("JWT_ACCESS_EXPIRY_MINS must be an integer, got '{raw}'")),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Sign a token for `user_id` acting as `role`, valid from now.
    pub fn issue(&self, user_id: DbId, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role,
            iat,
            exp: iat + self.access_token_expiry_mins * 60,
        };
        self.sign(&claims)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }
}
