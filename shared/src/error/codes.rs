//! Unified error codes for the PMIS backend
//!
//! This module defines all error codes used across the auth server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Identity provider errors
//! - 4xxx: User errors
//! - 5xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Email address has not been confirmed
    EmailNotConfirmed = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 3xxx: Provider ====================
    /// Identity provider returned an unexpected error
    ProviderError = 3001,
    /// Identity provider could not be reached
    ProviderUnavailable = 3002,
    /// Registration is disabled at the provider
    RegistrationDisabled = 3003,
    /// Provider rate limit hit, client must back off
    RateLimited = 3004,
    /// Password recovery email could not be sent
    RecoveryFailed = 3005,

    // ==================== 4xxx: User ====================
    /// User not found
    UserNotFound = 4001,
    /// Email is already registered
    EmailAlreadyRegistered = 4002,
    /// User holds the wrong role for this operation
    UserRoleInvalid = 4003,

    // ==================== 5xxx: Employee ====================
    /// Employee profile not found
    EmployeeNotFound = 5001,
    /// Identification number is already registered
    IdentificationExists = 5002,
    /// Target user must hold the employee role
    EmployeeRoleRequired = 5003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::EmailNotConfirmed => "Email not confirmed",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Required role missing",

            Self::ProviderError => "Identity provider error",
            Self::ProviderUnavailable => "Identity provider unavailable",
            Self::RegistrationDisabled => "Registration temporarily disabled",
            Self::RateLimited => "Too many requests",
            Self::RecoveryFailed => "Failed to send recovery email",

            Self::UserNotFound => "User not found",
            Self::EmailAlreadyRegistered => "Email is already registered",
            Self::UserRoleInvalid => "User role is not valid for this operation",

            Self::EmployeeNotFound => "Employee profile not found",
            Self::IdentificationExists => "Identification is already registered",
            Self::EmployeeRoleRequired => "User must hold the employee role",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::EmailNotConfirmed,

            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,

            3001 => Self::ProviderError,
            3002 => Self::ProviderUnavailable,
            3003 => Self::RegistrationDisabled,
            3004 => Self::RateLimited,
            3005 => Self::RecoveryFailed,

            4001 => Self::UserNotFound,
            4002 => Self::EmailAlreadyRegistered,
            4003 => Self::UserRoleInvalid,

            5001 => Self::EmployeeNotFound,
            5002 => Self::IdentificationExists,
            5003 => Self::EmployeeRoleRequired,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::RateLimited.code(), 3004);
        assert_eq!(ErrorCode::EmailAlreadyRegistered.code(), 4002);
        assert_eq!(ErrorCode::IdentificationExists.code(), 5002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_roundtrip() {
        for value in [0u16, 1, 2, 3, 4, 5, 1001, 1005, 2002, 3001, 3004, 4001, 5003, 9003] {
            let code = ErrorCode::try_from(value).expect("known code");
            assert_eq!(u16::from(code), value);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidCredentials).unwrap();
        assert_eq!(json, "1002");

        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::EmailAlreadyRegistered);

        assert!(serde_json::from_str::<ErrorCode>("777").is_err());
    }
}
