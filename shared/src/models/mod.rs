//! Data models shared between the auth server and API clients
//!
//! Request payloads carry their own validation rules (validator derive);
//! response models double as database records when the `db` feature is on.

pub mod auth;
pub mod employee;
pub mod role;

pub use auth::{AuthResponse, PasswordReset, PasswordUpdate, UserLogin, UserRegister, UserResponse};
pub use employee::{EmployeeCreate, EmployeeResponse, EmployeeStatus, SalaryType};
pub use role::UserRole;
