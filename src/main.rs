use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use todoview::api::TodoApi;
use todoview::{app, telemetry, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    telemetry::init_tracing();

    let api = TodoApi::new(&config.api_base, config.timeout())
        .with_context(|| format!("configuring remote API at {}", config.api_base))?;
    info!(base = %api.base(), "using remote todo API");

    for line in app::describe_routes() {
        info!(route = %line, "registered");
    }

    let router = app::router(AppState::new(api));
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    info!(addr = %config.listen, "todoview running on http://{}", config.listen);

    axum::serve(listener, router).await?;

    Ok(())
}
