use std::{convert::Infallible, net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    routing::get,
};
use reqwest::Client;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    api,
    config::Config,
    error::{Error, Result},
    management::TokenManager,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    /// Builds the HTTP client and an empty token cache from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        let tokens = TokenManager::new(
            client.clone(),
            config.token_url.clone(),
            config.credentials.clone(),
        );

        Ok(AppState {
            config: Arc::new(config),
            client,
            tokens: Arc::new(tokens),
        })
    }
}

/// Builds the application router. Both the self-hosted listener and
/// [`HostedHandler`] serve exactly this router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/api/search", get(api::search))
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves the router until Ctrl-C.
pub async fn start_api_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from_str(&config.server_addr())
        .map_err(|e| Error::Config(format!("Failed to parse server address: {}", e)))?;

    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Entry point for hosts that deliver requests themselves instead of letting
/// the service listen on a port.
#[derive(Clone)]
pub struct HostedHandler {
    router: Router,
}

impl HostedHandler {
    pub fn new(state: AppState) -> Self {
        HostedHandler {
            router: router(state),
        }
    }

    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::new(AppState::new(config)?))
    }

    pub async fn handle(&self, req: Request<Body>) -> Response<Body> {
        let result: std::result::Result<_, Infallible> = self.router.clone().oneshot(req).await;
        match result {
            Ok(res) => res,
            Err(never) => match never {},
        }
    }
}
