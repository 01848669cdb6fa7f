use pmis_auth::core::{AppState, Config, Server};
use pmis_auth::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logger::init_logger();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "PMIS auth server starting");

    let config = Config::from_env();

    let state = AppState::initialize(&config).await?;

    Server::with_state(config, state).run().await
}
