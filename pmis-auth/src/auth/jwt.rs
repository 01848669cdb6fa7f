//! Verification of provider-issued access tokens
//!
//! The identity provider signs every access token with a shared HS256 secret.
//! Tokens are verified locally (signature, expiry, audience, issuer); the
//! application role is not in the token and is loaded from the `users` table
//! by the extractor.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Provider token signing secret (at least 32 bytes)
    pub secret: String,
    /// Expected access-token lifetime (minutes); informational, the token's
    /// own `exp` claim is what gets enforced
    pub expiration_minutes: i64,
    /// Expected token issuer
    pub issuer: String,
    /// Expected token audience
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT settings from environment variables
    ///
    /// `JWT_ISSUER` defaults to the provider's auth endpoint, which is what
    /// the provider stamps into the `iss` claim.
    pub fn from_env(provider_url: &str) -> Result<Self, JwtError> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| JwtError::Config("JWT_SECRET must be set".to_string()))?;
        if secret.len() < 32 {
            return Err(JwtError::Config(
                "JWT_SECRET must be at least 32 characters long".to_string(),
            ));
        }

        Ok(Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| format!("{}/auth/v1", provider_url)),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".into()),
        })
    }
}

/// Claims carried by a provider access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// Account id (UUID)
    pub sub: String,
    /// Email address, when the provider includes it
    #[serde(default)]
    pub email: Option<String>,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    #[serde(default)]
    pub iat: Option<i64>,
    /// Audience
    pub aud: String,
    /// Issuer
    pub iss: String,
}

/// JWT verification errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Token verification service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    /// Verify and decode a provider access token
    pub fn decode(&self, token: &str) -> Result<ProviderClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let token_data =
            decode::<ProviderClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                    _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "unit-test-secret-0123456789abcdef0123";

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: SECRET.to_string(),
            expiration_minutes: 30,
            issuer: "http://localhost:54321/auth/v1".to_string(),
            audience: "authenticated".to_string(),
        })
    }

    fn make_token(secret: &str, exp_offset_minutes: i64, aud: &str, iss: &str) -> String {
        let now = Utc::now();
        let claims = ProviderClaims {
            sub: "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d".to_string(),
            email: Some("ana@example.com".to_string()),
            exp: (now + Duration::minutes(exp_offset_minutes)).timestamp(),
            iat: Some(now.timestamp()),
            aud: aud.to_string(),
            iss: iss.to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("test token")
    }

    #[test]
    fn test_decode_valid_token() {
        let service = test_service();
        let token = make_token(SECRET, 30, "authenticated", "http://localhost:54321/auth/v1");

        let claims = service.decode(&token).expect("valid token");
        assert_eq!(claims.sub, "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d");
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_service();
        let token = make_token(SECRET, -5, "authenticated", "http://localhost:54321/auth/v1");

        assert!(matches!(
            service.decode(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = test_service();
        let token = make_token(
            "another-secret-another-secret-12345678",
            30,
            "authenticated",
            "http://localhost:54321/auth/v1",
        );

        assert!(matches!(
            service.decode(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let service = test_service();
        let token = make_token(SECRET, 30, "anon", "http://localhost:54321/auth/v1");

        assert!(service.decode(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let service = test_service();
        let token = make_token(SECRET, 30, "authenticated", "http://evil.example.com");

        assert!(service.decode(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("abc"), None);
    }
}
