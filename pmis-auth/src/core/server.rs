//! HTTP server wiring: router assembly, middleware stack, serve loop

use axum::{Router, middleware};
use http::{HeaderValue, Method, header};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::auth::require_auth;
use crate::core::{AppState, Config};

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the bare route tree (without state or middleware)
pub fn build_app() -> Router<AppState> {
    Router::<AppState>::new()
        .merge(api::health::router())
        .merge(api::auth::router())
        .merge(api::employees::router())
}

/// Assemble the full router: routes + auth middleware + tower-http layers
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    build_app()
        // Bearer authentication - require_auth skips the public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// CORS restricted to the configured frontend origin, with credentials
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .expect("FRONTEND_URL must be a valid origin");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// HTTP server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create the server with an already-initialized state
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = build_router(self.state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("PMIS auth server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
