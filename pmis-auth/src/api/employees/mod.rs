//! Employee profile routes (bearer-protected)

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth/employee-profile", post(handler::create_profile))
}
