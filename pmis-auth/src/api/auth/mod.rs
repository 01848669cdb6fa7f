//! Authentication routes
//!
//! - register / login / password-reset / rate-limit-status: public
//! - me / password / logout / validate-*: bearer-protected (global
//!   require_auth middleware)

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Public routes - listed in the middleware's skip list
        .route("/api/auth/register", post(handler::register))
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/password-reset", post(handler::password_reset))
        .route("/api/auth/rate-limit-status", get(handler::rate_limit_status))
        // Protected routes
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/password", put(handler::update_password))
        .route("/api/auth/logout", post(handler::logout))
        .route("/api/auth/validate-manager", get(handler::validate_manager))
        .route("/api/auth/validate-employee", get(handler::validate_employee))
        .route("/api/auth/validate-sponsor", get(handler::validate_sponsor))
}
