use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::audit::AuditService;
use crate::auth::JwtService;
use crate::core::Config;
use crate::provider::{IdentityClient, RateLimitTracker};

/// Shared application state, cloned into every handler
///
/// All members are cheap to clone (pools and clients are internally
/// reference-counted); the only mutable state is the rate-limit tracker.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | db | Managed Postgres pool (sqlx) |
/// | provider | Identity provider HTTP client |
/// | jwt | Provider token verification |
/// | audit | Async audit-log writer |
/// | rate_limits | Provider rate-limit backoff tracker |
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: PgPool,
    pub provider: IdentityClient,
    pub jwt: Arc<JwtService>,
    pub audit: AuditService,
    pub rate_limits: Arc<RateLimitTracker>,
}

impl AppState {
    /// Connect to Postgres, run migrations, and assemble the state
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_db_connections)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .idle_timeout(std::time::Duration::from_secs(600))
            .max_lifetime(std::time::Duration::from_secs(1800))
            .connect(&config.database_url)
            .await?;

        info!("Connected to PostgreSQL");

        // Idempotent, fast when already applied
        sqlx::migrate!("./migrations").run(&pool).await?;

        Self::new(config.clone(), pool)
    }

    /// Assemble the state around an existing pool (tests use a lazy pool)
    pub fn new(config: Config, db: PgPool) -> anyhow::Result<Self> {
        let provider = IdentityClient::new(&config.provider_url, &config.provider_key)?;
        let jwt = Arc::new(JwtService::new(config.jwt.clone()));
        let audit = AuditService::spawn(db.clone());

        Ok(Self {
            config,
            db,
            provider,
            jwt,
            audit,
            rate_limits: Arc::new(RateLimitTracker::new()),
        })
    }
}
