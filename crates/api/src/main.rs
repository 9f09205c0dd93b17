use anyhow::Context;

use shopnum_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopnum_observability::init();

    let config = ApiConfig::from_env();
    let app = shopnum_api::app::build_app_from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
