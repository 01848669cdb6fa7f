use sqlx::PgPool;

use crate::audit::AuditRecord;

/// Append one audit row. Rows are immutable once written.
pub async fn insert(pool: &PgPool, record: &AuditRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO audit_logs (user_id, action, table_name, record_id, old_data, new_data) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(record.user_id)
    .bind(record.action.as_str())
    .bind(&record.table_name)
    .bind(&record.record_id)
    .bind(&record.old_data)
    .bind(&record.new_data)
    .execute(pool)
    .await?;

    Ok(())
}
