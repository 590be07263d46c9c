use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use proceedings_csv::{pipeline, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_args();

    let summary = pipeline::run(&config)
        .await
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    info!(
        "Done: {} of {} papers in {} sessions, {} file(s) written",
        summary.papers_retained,
        summary.papers_loaded,
        summary.sessions,
        summary.files.len()
    );
    Ok(())
}
