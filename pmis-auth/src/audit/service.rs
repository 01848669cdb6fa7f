//! Audit log service
//!
//! Requests enqueue records on a bounded mpsc channel; a background worker
//! drains the channel and writes rows. Failures are logged and dropped -
//! audit writes are best-effort and must never fail the request.

use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::types::{AuditAction, AuditRecord};
use crate::db;

/// Pending records before log() starts dropping
const AUDIT_BUFFER: usize = 256;

#[derive(Debug, Clone)]
pub struct AuditService {
    tx: mpsc::Sender<AuditRecord>,
}

impl AuditService {
    /// Start the background writer and return the handle used by handlers
    pub fn spawn(pool: PgPool) -> Self {
        let (tx, mut rx) = mpsc::channel::<AuditRecord>(AUDIT_BUFFER);

        tokio::spawn(async move {
            while let Some(record) = rx.recv().await {
                if let Err(e) = db::audit_logs::insert(&pool, &record).await {
                    tracing::warn!(
                        action = %record.action,
                        error = %e,
                        "Failed to write audit log"
                    );
                }
            }
        });

        Self { tx }
    }

    /// Queue an audit record. Never blocks and never fails the caller.
    pub fn log(
        &self,
        action: AuditAction,
        user_id: Option<Uuid>,
        record_id: Option<String>,
        new_data: Value,
    ) {
        let record = AuditRecord {
            user_id,
            action,
            table_name: action.table_name().to_string(),
            record_id,
            old_data: None,
            new_data: Some(new_data),
        };

        if let Err(e) = self.tx.try_send(record) {
            tracing::warn!(error = %e, "Audit channel full, dropping entry");
        }
    }
}
