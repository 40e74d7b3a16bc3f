use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use saspo_api::{app, AppState};
use saspo_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("saspo=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config));
    state.store.assets().ensure_exists()?;

    info!(
        data_file = %state.config.data_file.display(),
        upload_dir = %state.config.upload_dir.display(),
        reference_mode = %state.config.reference_mode,
        "Storage configured"
    );

    let addr = format!("{}:{}", state.config.web_host, state.config.web_port);
    let router = app(state);

    info!("Saspo site starting on {addr}");
    info!("Dashboard available at http://{addr}/dashboard");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
