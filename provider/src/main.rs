use airbyte::config::{load_config, ClientConfig, ProviderConfig};
use airbyte::Client;
use airbyte_provider::api::{create_router, ApiState};
use airbyte_provider::Registry;
use anyhow::{Context, Result};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airbyte_provider=info,airbyte=info".into()),
        )
        .init();

    info!("Airbyte provider starting...");

    let mut config = match std::env::var("AIRBYTE_PROVIDER_CONFIG") {
        Ok(path) => load_config(&path)?,
        Err(_) => ProviderConfig::default(),
    };

    // Environment takes precedence over the config file
    if std::env::var("AIRBYTE_HOST").is_ok() {
        config.client = Some(ClientConfig::from_env()?);
    }

    if let Ok(port) = std::env::var("AIRBYTE_PROVIDER_PORT") {
        config.api.port = port
            .parse()
            .context("AIRBYTE_PROVIDER_PORT must be a valid port number")?;
    }

    let client = match config.client {
        Some(client_config) => {
            info!(host = %client_config.host, "Airbyte connection loaded");
            Some(Client::new(client_config).context("Failed to build Airbyte client")?)
        }
        None => {
            warn!("No Airbyte connection configured; waiting for POST /api/configure");
            None
        }
    };

    let registry = Registry::with_default_sources(config.provider_name.clone());
    info!(
        provider = %registry.provider(),
        resources = registry.len(),
        "Resource registry built"
    );

    let router = create_router(ApiState::new(registry, client));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.api.port))
        .await
        .context("Failed to bind provider API port")?;
    info!(port = config.api.port, "Provider API listening");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "Provider API server error");
        }
    });

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c signal")?;
    info!("Shutdown signal received");

    server_handle.abort();
    info!("Airbyte provider stopped");

    Ok(())
}
