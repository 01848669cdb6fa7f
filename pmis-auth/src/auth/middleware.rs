//! Authentication middleware
//!
//! Applied at router level; validates `Authorization: Bearer <token>` and
//! injects [`CurrentUser`] into the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::AppError;

use crate::auth::authenticate;
use crate::core::AppState;

/// API routes served without authentication
const PUBLIC_API_ROUTES: &[&str] = &[
    "/api/auth/register",
    "/api/auth/login",
    "/api/auth/password-reset",
    "/api/auth/rate-limit-status",
];

/// Authentication middleware - requires a valid bearer token
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (banner, health probe)
/// - the [`PUBLIC_API_ROUTES`] list
///
/// # Errors
///
/// | Failure | Response |
/// |---------|----------|
/// | Missing Authorization header | 401 NotAuthenticated |
/// | Expired token | 401 TokenExpired |
/// | Invalid token | 401 TokenInvalid |
/// | No profile row for the subject | 404 UserNotFound |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow OPTIONS requests for CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip authentication
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let user = authenticate(&state, req.headers(), req.uri()).await?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
