use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | AUTH_PROVIDER_URL | (required) | Base URL of the hosted identity provider |
/// | AUTH_PROVIDER_KEY | (required) | Provider API key (`apikey` header) |
/// | DATABASE_URL | (required) | Managed Postgres connection string |
/// | JWT_SECRET | (required) | Provider token signing secret (>= 32 chars) |
/// | JWT_EXPIRATION_MINUTES | 30 | Expected access-token lifetime |
/// | JWT_AUDIENCE | authenticated | Expected `aud` claim |
/// | JWT_ISSUER | {AUTH_PROVIDER_URL}/auth/v1 | Expected `iss` claim |
/// | FRONTEND_URL | http://localhost:5173 | CORS origin + recovery redirect |
/// | HTTP_PORT | 8000 | Listen port |
/// | MAX_DB_CONNECTIONS | 5 | sqlx pool size |
/// | ENVIRONMENT | development | development / staging / production |
///
/// A `.env` file is loaded before this is read (dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Managed Postgres connection string
    pub database_url: String,
    /// Connection pool size
    pub max_db_connections: u32,
    /// Identity provider base URL
    pub provider_url: String,
    /// Identity provider API key
    pub provider_key: String,
    /// JWT verification settings
    pub jwt: JwtConfig,
    /// Frontend origin (CORS + password recovery redirect)
    pub frontend_url: String,
    /// Running environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required variables abort startup with a clear message when missing.
    pub fn from_env() -> Self {
        let provider_url = std::env::var("AUTH_PROVIDER_URL")
            .expect("AUTH_PROVIDER_URL must be set")
            .trim_end_matches('/')
            .to_string();

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_db_connections: std::env::var("MAX_DB_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            jwt: JwtConfig::from_env(&provider_url).expect("valid JWT configuration"),
            provider_key: std::env::var("AUTH_PROVIDER_KEY")
                .expect("AUTH_PROVIDER_KEY must be set"),
            provider_url,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
