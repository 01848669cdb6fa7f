//! Service banner and health probe

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::root))
        .route("/health", get(handler::health))
}
