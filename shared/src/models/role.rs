//! User role enumeration

use serde::{Deserialize, Serialize};

/// Application role attached to every user account
///
/// Stored as lowercase text in the `users.role` column; the database enforces
/// membership with a CHECK constraint, serde enforces it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Project managers: full access to project administration
    Manager,
    /// Employees: own profile and assigned work
    Employee,
    /// Sponsors: read access to sponsored projects
    Sponsor,
}

impl UserRole {
    /// Lowercase string form, as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Sponsor => "sponsor",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"sponsor\"").unwrap(),
            UserRole::Sponsor
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserRole::Employee.to_string(), "employee");
    }
}
