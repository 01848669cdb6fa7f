//! Audit logging
//!
//! Sensitive operations append rows to the `audit_logs` table through a
//! bounded channel and a background worker, so a slow or failing write never
//! delays or fails the request that triggered it.

pub mod service;
pub mod types;

pub use service::AuditService;
pub use types::{AuditAction, AuditRecord};
