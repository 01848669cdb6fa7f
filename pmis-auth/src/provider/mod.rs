//! Hosted identity provider integration
//!
//! The provider owns credential storage, password hashing, token signing and
//! recovery emails; this module is the HTTP client for its REST surface plus
//! the error mapping and the rate-limit backoff tracker.

pub mod backoff;
pub mod client;
pub mod error;
pub mod types;

pub use backoff::{RateLimitStatus, RateLimitTracker};
pub use client::IdentityClient;
pub use error::{ProviderError, map_auth_error};
pub use types::{ProviderSession, ProviderUser, SignUpResponse};
