//! Authentication handlers
//!
//! Every operation delegates credentials and sessions to the identity
//! provider and keeps the application profile in the `users` table.

use axum::{Json, extract::State};
use chrono::Utc;
use http::{HeaderMap, StatusCode};
use validator::Validate;

use shared::models::{
    AuthResponse, PasswordReset, PasswordUpdate, UserLogin, UserRegister, UserResponse,
};
use shared::{AppError, ErrorCode, UserRole};

use crate::audit::AuditAction;
use crate::auth::{CurrentUser, JwtService};
use crate::core::AppState;
use crate::db;
use crate::provider::{ProviderError, SignUpResponse, map_auth_error};

/// Token lifetime reported when the provider withholds the session until the
/// email address is confirmed
const DEFAULT_EXPIRES_IN: i64 = 3600;

/// Register a new user
///
/// Creates the provider account first, then the application profile. When the
/// profile insert fails the provider account is removed again so the email
/// can be retried.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserRegister>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;

    let signup = state
        .provider
        .sign_up(&payload.email, &payload.password)
        .await
        .map_err(|e| map_auth_error(e, "register", &state.rate_limits))?;

    let provider_user_id = signup.user().id;

    let user = match db::users::insert(&state.db, provider_user_id, &payload.email, payload.role)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            // The provider account exists without a profile; remove it so the
            // email is not left unusable.
            if let Err(del) = state.provider.admin_delete_user(provider_user_id).await {
                tracing::error!(
                    user_id = %provider_user_id,
                    error = %del,
                    "Failed to roll back provider account"
                );
            }

            if db::is_unique_violation(&e, "users_email_key") {
                return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
            }
            return Err(AppError::database(format!(
                "Failed to create user profile: {}",
                e
            )));
        }
    };

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    let (access_token, expires_in) = match signup {
        SignUpResponse::Session(session) => (session.access_token, session.expires_in),
        // Session withheld until the email address is confirmed
        SignUpResponse::Pending(_) => (String::new(), DEFAULT_EXPIRES_IN),
    };

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::bearer(access_token, expires_in, user)),
    ))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<UserLogin>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let session = match state
        .provider
        .sign_in_with_password(&payload.email, &payload.password)
        .await
    {
        Ok(session) => session,
        Err(e) => {
            if matches!(e, ProviderError::InvalidCredentials) {
                state.audit.log(
                    AuditAction::LoginFailed,
                    None,
                    None,
                    serde_json::json!({
                        "email": &payload.email,
                        "reason": "invalid_credentials"
                    }),
                );
                tracing::warn!(email = %payload.email, "Login failed - invalid credentials");
            }
            return Err(map_auth_error(e, "login", &state.rate_limits));
        }
    };

    let user = db::users::find_by_id(&state.db, session.user.id)
        .await
        .map_err(|e| AppError::database(format!("Failed to query user: {}", e)))?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::UserNotFound, "User not found in database")
        })?;

    state.audit.log(
        AuditAction::Login,
        Some(user.id),
        None,
        serde_json::json!({ "login_time": Utc::now().to_rfc3339() }),
    );

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(Json(AuthResponse::bearer(
        session.access_token,
        session.expires_in,
        user,
    )))
}

/// Current user profile, read fresh from the database
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserResponse>, AppError> {
    let profile = db::users::find_by_id(&state.db, user.id)
        .await
        .map_err(|e| AppError::database(format!("Failed to query user: {}", e)))?
        .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found"))?;

    Ok(Json(profile))
}

/// Send a password recovery email
pub async fn password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordReset>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload.validate()?;

    state
        .provider
        .send_recovery_email(&payload.email, &state.config.frontend_url)
        .await
        .map_err(|e| match e {
            ProviderError::RateLimited => map_auth_error(e, "password-reset", &state.rate_limits),
            other => {
                tracing::error!(error = %other, "Password recovery failed");
                AppError::new(ErrorCode::RecoveryFailed)
            }
        })?;

    Ok(Json(serde_json::json!({
        "message": "Password recovery email sent"
    })))
}

/// Change the caller's password at the provider
pub async fn update_password(
    State(state): State<AppState>,
    user: CurrentUser,
    headers: HeaderMap,
    Json(payload): Json<PasswordUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload.validate()?;

    let token = bearer_token(&headers)?;
    state
        .provider
        .update_password(token, &payload.password)
        .await
        .map_err(|e| map_auth_error(e, "password-update", &state.rate_limits))?;

    tracing::info!(user_id = %user.id, "Password updated");

    Ok(Json(serde_json::json!({ "message": "Password updated" })))
}

/// Log out: revoke the provider session (best-effort) and audit
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer_token(&headers)?;
    if let Err(e) = state.provider.sign_out(token).await {
        tracing::warn!(user_id = %user.id, error = %e, "Provider sign-out failed");
    }

    state.audit.log(
        AuditAction::Logout,
        Some(user.id),
        None,
        serde_json::json!({ "email": &user.email }),
    );

    tracing::info!(user_id = %user.id, "User logged out");

    Ok(Json(serde_json::json!({
        "message": "Logged out successfully"
    })))
}

pub async fn validate_manager(user: CurrentUser) -> Result<Json<serde_json::Value>, AppError> {
    validate_role(user, UserRole::Manager)
}

pub async fn validate_employee(user: CurrentUser) -> Result<Json<serde_json::Value>, AppError> {
    validate_role(user, UserRole::Employee)
}

pub async fn validate_sponsor(user: CurrentUser) -> Result<Json<serde_json::Value>, AppError> {
    validate_role(user, UserRole::Sponsor)
}

fn validate_role(
    user: CurrentUser,
    required: UserRole,
) -> Result<Json<serde_json::Value>, AppError> {
    user.require_role(required)?;
    Ok(Json(serde_json::json!({
        "message": "Access granted",
        "role": required.as_str(),
        "user_id": user.id
    })))
}

/// Backoff tracker snapshot
pub async fn rate_limit_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "rate_limiting": state.rate_limits.status()
    }))
}

/// Raw bearer token, for calls forwarded to the provider under the caller's
/// own session
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
        .ok_or_else(AppError::unauthorized)
}
