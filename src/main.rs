use anyhow::Context;
use tracing_subscriber::{EnvFilter, prelude::*};
use userhub::app;
use userhub::config::{ConfigService, ServerConfig};
use userhub::lifecycle::shutdown_signal;

const DEFAULT_LOG_FILTER: &str = "userhub=info,tower_http=info,sea_orm=warn";

fn init_tracing(config: &ConfigService) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let format_json = config
        .get("LOG_FORMAT")
        .is_some_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if format_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let env = ConfigService::from_env();
    init_tracing(&env);

    let config = ServerConfig::from_service(&env).context("invalid configuration")?;
    tracing::info!(variant = %config.variant, "Starting userhub...");

    let (application, router) = app::bootstrap(&config)
        .await
        .context("failed to initialize application")?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Initiating graceful shutdown...");
    application
        .shutdown()
        .await
        .context("failed to shut down cleanly")?;

    tracing::info!("Server stopped");
    Ok(())
}
