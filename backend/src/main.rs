use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use backend::config::app_config::AppConfig;
use backend::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // Sentry only when a DSN is configured; the guard has to live as long as main
    let _guard = config.sentry_dsn.as_ref().map(|dsn| {
        sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let state = Arc::new(AppState::from_config(&config)?);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Serving on {} (gemini: {}, model: {})",
        config.bind_addr,
        if config.has_gemini_key() { "live" } else { "mock" },
        config.gemini_model
    );
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
