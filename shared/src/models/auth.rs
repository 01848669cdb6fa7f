//! Authentication request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::UserRole;

// =============================================================================
// Request models
// =============================================================================

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserRegister {
    #[validate(email)]
    pub email: String,
    /// Plaintext password, forwarded to the identity provider (never stored)
    #[validate(length(min = 6, max = 100))]
    pub password: String,
    pub role: UserRole,
}

/// Login payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserLogin {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Password recovery request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordReset {
    #[validate(email)]
    pub email: String,
}

/// Password change for an authenticated user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordUpdate {
    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

// =============================================================================
// Response models
// =============================================================================

/// Public view of a user account
///
/// Mirrors a `users` row one-to-one, so with the `db` feature it is fetched
/// directly with `query_as`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Session envelope returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Provider-issued access token (JWT). Empty when the provider withholds
    /// the session until the email address is confirmed.
    pub access_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    /// Build a bearer-token response
    pub fn bearer(access_token: impl Into<String>, expires_in: i64, user: UserResponse) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            expires_in,
            user,
        }
    }
}
