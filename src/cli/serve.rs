use crate::{config::Config, error, server};

/// Starts the self-hosted listener unless running under an external host.
pub async fn serve(config: Config) {
    if config.is_production() {
        tracing::info!("APP_ENV=production, not starting a listener; requests are expected from the host");
        return;
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server failed: {}", e);
    }
}
