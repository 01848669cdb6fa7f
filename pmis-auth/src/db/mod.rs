//! Database layer - repositories over the managed Postgres
//!
//! Thin sqlx query modules; uniqueness and role membership are enforced by
//! the schema, handlers translate the resulting violations.

pub mod audit_logs;
pub mod employees;
pub mod users;

/// Whether `err` is a unique violation on the named constraint
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if db.is_unique_violation() && db.constraint() == Some(constraint)
    )
}
