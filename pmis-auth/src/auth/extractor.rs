//! CurrentUser extractor
//!
//! Resolves the authenticated caller from the bearer token. The token only
//! proves identity; the application role lives in the `users` table and is
//! loaded here, so a role change takes effect on the next request.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use shared::models::UserRole;
use shared::{AppError, ErrorCode};

use crate::auth::{JwtError, JwtService};
use crate::core::AppState;
use crate::db;
use crate::security_log;

/// Authenticated caller context
///
/// Injected into request extensions by [`require_auth`](crate::auth::require_auth)
/// and available to handlers as an extractor.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_manager(&self) -> bool {
        self.role == UserRole::Manager
    }

    /// Require an exact role
    ///
    /// # Errors
    ///
    /// 403 Forbidden when the caller holds a different role
    pub fn require_role(&self, required: UserRole) -> Result<(), AppError> {
        if self.role != required {
            security_log!(
                "WARN",
                "role_denied",
                user_id = self.id.to_string(),
                required_role = required.as_str(),
                user_role = self.role.as_str()
            );
            return Err(AppError::with_message(
                ErrorCode::RoleRequired,
                format!(
                    "Access denied: role '{}' required, you have '{}'",
                    required, self.role
                ),
            ));
        }
        Ok(())
    }

    /// Require any of the given roles
    pub fn require_any_role(&self, allowed: &[UserRole]) -> Result<(), AppError> {
        if !allowed.contains(&self.role) {
            let names: Vec<&str> = allowed.iter().map(UserRole::as_str).collect();
            security_log!(
                "WARN",
                "role_denied",
                user_id = self.id.to_string(),
                required_roles = names.join(","),
                user_role = self.role.as_str()
            );
            return Err(AppError::with_message(
                ErrorCode::RoleRequired,
                format!(
                    "Access denied: one of [{}] required, you have '{}'",
                    names.join(", "),
                    self.role
                ),
            ));
        }
        Ok(())
    }
}

/// Validate the bearer token and load the caller's profile row
pub async fn authenticate(
    state: &AppState,
    headers: &http::HeaderMap,
    uri: &http::Uri,
) -> Result<CurrentUser, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = uri.to_string());
            return Err(AppError::unauthorized());
        }
    };

    let claims = state.jwt.decode(token).map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = e.to_string(),
            uri = uri.to_string()
        );
        match e {
            JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    let user_id: Uuid = claims
        .sub
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed subject claim"))?;

    let profile = db::users::find_by_id(&state.db, user_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to load user profile: {}", e)))?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found"))?;

    Ok(CurrentUser {
        id: profile.id,
        email: profile.email,
        role: profile.role,
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already extracted by the require_auth middleware
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = authenticate(state, &parts.headers, &parts.uri).await?;

        // Store for potential reuse
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}
