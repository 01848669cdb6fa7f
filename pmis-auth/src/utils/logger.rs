//! Logging infrastructure
//!
//! Structured logging via tracing: console output in development, JSON in
//! production, optional daily-rotated file output when `LOG_DIR` is set.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// Filter comes from `RUST_LOG` when set; output format follows
/// `ENVIRONMENT` and `LOG_DIR`.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pmis_auth=info,tower_http=info".into());

    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match std::env::var("LOG_DIR").ok() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "pmis-auth.log");
            builder.with_writer(file_appender).with_ansi(false).init();
        }
        None if environment == "production" => builder.json().init(),
        None => builder.init(),
    }
}
