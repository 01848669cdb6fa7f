//! Provider error classification and HTTP error mapping

use http::StatusCode;
use thiserror::Error;

use shared::{AppError, ErrorCode};

use crate::provider::backoff::RateLimitTracker;

/// Errors surfaced by the identity provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("email is already registered")]
    UserAlreadyRegistered,

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("email not confirmed")]
    EmailNotConfirmed,

    #[error("signups are disabled")]
    SignupDisabled,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("provider returned {status}: {message}")]
    Unexpected { status: u16, message: String },

    #[error("request to identity provider failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProviderError {
    /// Classify a non-success provider response
    ///
    /// The provider reports errors as JSON with the message under one of
    /// several keys depending on the endpoint; classification matches the
    /// message text case-insensitively.
    pub fn classify(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body);
        let lowered = message.to_lowercase();

        if status == StatusCode::TOO_MANY_REQUESTS
            || lowered.contains("rate limit exceeded")
            || lowered.contains("too many requests")
        {
            Self::RateLimited
        } else if lowered.contains("user already registered")
            || lowered.contains("already been registered")
        {
            Self::UserAlreadyRegistered
        } else if lowered.contains("invalid login credentials") {
            Self::InvalidCredentials
        } else if lowered.contains("email not confirmed") {
            Self::EmailNotConfirmed
        } else if lowered.contains("signup disabled") || lowered.contains("signups not allowed") {
            Self::SignupDisabled
        } else {
            Self::Unexpected {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// Pull the human-readable message out of a provider error body
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.trim().to_string()
}

/// Map a provider error to the HTTP error returned to the client
///
/// Rate-limit hits are recorded on the tracker, which determines the advertised
/// backoff window; `operation` selects the wording (register/login/generic).
pub fn map_auth_error(
    err: ProviderError,
    operation: &str,
    tracker: &RateLimitTracker,
) -> AppError {
    match err {
        ProviderError::RateLimited => {
            let wait_minutes = tracker.record_hit();
            let detail = match operation {
                "register" => format!(
                    "Too many registration attempts. Wait {} minutes.",
                    wait_minutes
                ),
                "login" => format!("Too many login attempts. Wait {} minutes.", wait_minutes),
                _ => format!("Too many requests. Wait {} minutes.", wait_minutes),
            };
            AppError::rate_limited(detail, wait_minutes * 60)
        }
        ProviderError::UserAlreadyRegistered => AppError::new(ErrorCode::EmailAlreadyRegistered),
        ProviderError::InvalidCredentials => AppError::invalid_credentials(),
        ProviderError::EmailNotConfirmed => AppError::new(ErrorCode::EmailNotConfirmed),
        ProviderError::SignupDisabled => AppError::new(ErrorCode::RegistrationDisabled),
        ProviderError::Transport(e) => {
            tracing::error!(operation, error = %e, "Identity provider unreachable");
            AppError::new(ErrorCode::ProviderUnavailable)
        }
        ProviderError::Unexpected { status, message } => {
            tracing::error!(operation, status, message = %message, "Unexpected provider error");
            AppError::new(ErrorCode::ProviderError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rate_limit() {
        assert!(matches!(
            ProviderError::classify(StatusCode::TOO_MANY_REQUESTS, "{}"),
            ProviderError::RateLimited
        ));
        assert!(matches!(
            ProviderError::classify(
                StatusCode::BAD_REQUEST,
                r#"{"msg":"Rate limit exceeded"}"#
            ),
            ProviderError::RateLimited
        ));
    }

    #[test]
    fn test_classify_duplicate_user() {
        assert!(matches!(
            ProviderError::classify(
                StatusCode::UNPROCESSABLE_ENTITY,
                r#"{"msg":"User already registered"}"#
            ),
            ProviderError::UserAlreadyRegistered
        ));
        assert!(matches!(
            ProviderError::classify(
                StatusCode::BAD_REQUEST,
                r#"{"message":"A user with this email address has already been registered"}"#
            ),
            ProviderError::UserAlreadyRegistered
        ));
    }

    #[test]
    fn test_classify_invalid_credentials() {
        assert!(matches!(
            ProviderError::classify(
                StatusCode::BAD_REQUEST,
                r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#
            ),
            ProviderError::InvalidCredentials
        ));
    }

    #[test]
    fn test_classify_email_not_confirmed() {
        assert!(matches!(
            ProviderError::classify(StatusCode::BAD_REQUEST, r#"{"msg":"Email not confirmed"}"#),
            ProviderError::EmailNotConfirmed
        ));
    }

    #[test]
    fn test_classify_signup_disabled() {
        assert!(matches!(
            ProviderError::classify(StatusCode::FORBIDDEN, r#"{"msg":"Signup disabled"}"#),
            ProviderError::SignupDisabled
        ));
    }

    #[test]
    fn test_classify_unexpected_keeps_status() {
        let err = ProviderError::classify(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            ProviderError::Unexpected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_map_rate_limited_carries_backoff() {
        let tracker = RateLimitTracker::new();
        let err = map_auth_error(ProviderError::RateLimited, "login", &tracker);
        assert_eq!(err.code, ErrorCode::RateLimited);
        assert!(err.message.contains("login"));
        let details = err.details.unwrap();
        assert_eq!(details.get("retry_after_secs").unwrap(), 120);
    }

    #[test]
    fn test_map_known_errors() {
        let tracker = RateLimitTracker::new();
        assert_eq!(
            map_auth_error(ProviderError::UserAlreadyRegistered, "register", &tracker).code,
            ErrorCode::EmailAlreadyRegistered
        );
        assert_eq!(
            map_auth_error(ProviderError::InvalidCredentials, "login", &tracker).code,
            ErrorCode::InvalidCredentials
        );
        assert_eq!(
            map_auth_error(ProviderError::SignupDisabled, "register", &tracker).code,
            ErrorCode::RegistrationDisabled
        );
    }
}
