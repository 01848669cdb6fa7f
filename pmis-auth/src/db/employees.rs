use sqlx::PgPool;

use shared::models::{EmployeeCreate, EmployeeResponse};

/// Insert an employee profile
///
/// Fails with a unique violation on `employees_identification_key` when the
/// identification number is already registered.
pub async fn insert(
    pool: &PgPool,
    payload: &EmployeeCreate,
) -> Result<EmployeeResponse, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO employees \
            (user_id, name, identification, position, phone, address, \
             salary_type, salary_hourly, salary_biweekly, salary_monthly, \
             resume_url, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING id, user_id, name, identification, position, phone, address, \
                   salary_type, salary_hourly, salary_biweekly, salary_monthly, \
                   resume_url, status, created_at, updated_at",
    )
    .bind(payload.user_id)
    .bind(&payload.name)
    .bind(&payload.identification)
    .bind(&payload.position)
    .bind(&payload.phone)
    .bind(&payload.address)
    .bind(payload.salary_type)
    .bind(payload.salary_hourly)
    .bind(payload.salary_biweekly)
    .bind(payload.salary_monthly)
    .bind(&payload.resume_url)
    .bind(payload.status)
    .fetch_one(pool)
    .await
}
