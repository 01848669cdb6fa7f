//! Authentication and authorization
//!
//! - [`JwtService`] - verification of provider-issued access tokens
//! - [`CurrentUser`] - authenticated caller context + role guards
//! - [`require_auth`] - router-level authentication middleware

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use extractor::{CurrentUser, authenticate};
pub use jwt::{JwtConfig, JwtError, JwtService, ProviderClaims};
pub use middleware::require_auth;
