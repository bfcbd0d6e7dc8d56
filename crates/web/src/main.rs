use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kinoteka_source::HttpSource;
use kinoteka_web::config::Config;
use kinoteka_web::routes::build_router;
use kinoteka_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();
    info!(api_base = %config.api_base, limit = config.library_limit, "using library API");

    let state = AppState {
        source: Arc::new(HttpSource::new(&config.api_base)),
        library_limit: config.library_limit,
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
