//! Shared types for the PMIS backend
//!
//! Common types used across the auth server and API clients: role and DTO
//! definitions, the unified error system, and response structures.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::role::UserRole;
pub use serde::{Deserialize, Serialize};
