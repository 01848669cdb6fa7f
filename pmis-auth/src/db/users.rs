use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{UserResponse, UserRole};

/// Insert the application profile for a freshly created provider account
///
/// Fails with a unique violation on `users_email_key` when the email is
/// already registered.
pub async fn insert(
    pool: &PgPool,
    id: Uuid,
    email: &str,
    role: UserRole,
) -> Result<UserResponse, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO users (id, email, role) VALUES ($1, $2, $3) \
         RETURNING id, email, role, created_at, updated_at",
    )
    .bind(id)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserResponse>, sqlx::Error> {
    sqlx::query_as("SELECT id, email, role, created_at, updated_at FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
