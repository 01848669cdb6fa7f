use axum::{Json, extract::State};

use crate::core::AppState;

/// Service banner
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "PMIS API running",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// Health probe: degraded when the database pool cannot hand out a connection
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.db.acquire().await.is_ok();
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "db": db_ok
    }))
}
