use std::sync::Arc;

use anyhow::Context;
use tokio::signal;

use sage_relay::{
    config::Config,
    routes,
    services::{gemini::GeminiClient, provider::TextGenerator},
    state::AppState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;

    let gemini = GeminiClient::new(config.gemini()).context("failed to build Gemini client")?;
    tracing::info!(
        model = %gemini.model(),
        timeout = ?config.provider_timeout,
        "Initialized Gemini text provider"
    );

    let provider: Arc<dyn TextGenerator> = Arc::new(gemini);
    let state = AppState::shared(provider);

    let app = routes::create_router(config.allowed_origin.clone()).with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        allowed_origin = ?config.allowed_origin,
        "Sage relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
