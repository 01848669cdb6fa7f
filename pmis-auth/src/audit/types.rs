//! Audit log types

use serde_json::Value;
use uuid::Uuid;

/// Auditable actions (enumerated, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Login,
    LoginFailed,
    Logout,
    EmployeeCreated,
}

impl AuditAction {
    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::LoginFailed => "LOGIN_FAILED",
            Self::Logout => "LOGOUT",
            Self::EmployeeCreated => "EMPLOYEE_CREATED",
        }
    }

    /// Table the action operates on
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Login | Self::LoginFailed | Self::Logout => "users",
            Self::EmployeeCreated => "employees",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the audit trail
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub user_id: Option<Uuid>,
    pub action: AuditAction,
    pub table_name: String,
    pub record_id: Option<String>,
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_strings() {
        assert_eq!(AuditAction::Login.as_str(), "LOGIN");
        assert_eq!(AuditAction::LoginFailed.as_str(), "LOGIN_FAILED");
        assert_eq!(AuditAction::EmployeeCreated.as_str(), "EMPLOYEE_CREATED");
    }

    #[test]
    fn test_action_tables() {
        assert_eq!(AuditAction::Login.table_name(), "users");
        assert_eq!(AuditAction::EmployeeCreated.table_name(), "employees");
    }
}
