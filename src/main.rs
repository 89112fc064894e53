use anyhow::{Context, Result};
use localized_auth::config::Config;
use localized_auth::i18n::{Localize, Localizer};
use localized_auth::server::{self, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_auth=info".parse()?),
        )
        .init();

    info!("Starting localized auth service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Templates are checked here so a gap fails startup, not a request
    let localizer = Localizer::with_default(&config.default_locale)
        .context("Failed to build message catalog")?;

    let locales: Vec<_> = localizer
        .registry()
        .list()
        .map(|locale| locale.code())
        .collect();
    info!(
        "Supported locales: {} (default: {})",
        locales.join(", "),
        localizer.default_locale()
    );

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    server::serve(listener, AppState::new(localizer)).await
}
