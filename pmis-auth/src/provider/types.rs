//! Wire types for the identity provider's auth endpoints

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Account record as the provider returns it
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Issued session (access token + embedded account record)
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: ProviderUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Sign-up outcome
///
/// The provider returns a full session when accounts are auto-confirmed, or
/// just the pending account record when the email address must be confirmed
/// before a session is issued.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(ProviderSession),
    Pending(ProviderUser),
}

impl SignUpResponse {
    /// The created account, session or not
    pub fn user(&self) -> &ProviderUser {
        match self {
            Self::Session(session) => &session.user,
            Self::Pending(user) => user,
        }
    }
}
