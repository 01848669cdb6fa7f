//! Employee profile handlers

use axum::{Json, extract::State};
use http::StatusCode;
use validator::Validate;

use shared::models::{EmployeeCreate, EmployeeResponse};
use shared::{AppError, ErrorCode, UserRole};

use crate::audit::AuditAction;
use crate::auth::CurrentUser;
use crate::core::AppState;
use crate::db;

/// Create an employee profile
///
/// Managers may create a profile for any user; everyone else only for
/// themselves. The target account must hold the `employee` role.
pub async fn create_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    payload.validate()?;

    if !current_user.is_manager() && current_user.id != payload.user_id {
        return Err(AppError::forbidden(
            "You may not create a profile for another user",
        ));
    }

    let target = db::users::find_by_id(&state.db, payload.user_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to query user: {}", e)))?;

    // Missing account and wrong role collapse into the same rejection
    match target {
        Some(user) if user.role == UserRole::Employee => {}
        _ => return Err(AppError::new(ErrorCode::EmployeeRoleRequired)),
    }

    let employee = db::employees::insert(&state.db, &payload).await.map_err(|e| {
        if db::is_unique_violation(&e, "employees_identification_key") {
            AppError::new(ErrorCode::IdentificationExists)
        } else {
            AppError::database(format!("Failed to create employee profile: {}", e))
        }
    })?;

    state.audit.log(
        AuditAction::EmployeeCreated,
        Some(current_user.id),
        Some(employee.id.to_string()),
        serde_json::to_value(&employee).unwrap_or(serde_json::Value::Null),
    );

    tracing::info!(
        employee_id = employee.id,
        user_id = %employee.user_id,
        "Employee profile created"
    );

    Ok((StatusCode::CREATED, Json(employee)))
}
