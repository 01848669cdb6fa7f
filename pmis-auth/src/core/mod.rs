//! Core server infrastructure: configuration, shared state, HTTP wiring

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, build_router};
pub use state::AppState;
