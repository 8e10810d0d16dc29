pub mod bootstrap;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use bootstrap::{preview, run_sessions, wire_dependencies, ExitReason};
use sf_core::AppConfig;

/// Run the app over the given terminal streams until it exits.
pub async fn run_app<R, W>(config: AppConfig, reader: R, writer: W) -> anyhow::Result<ExitReason>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let deps = wire_dependencies(&config, reader, writer).context("Failed to wire dependencies")?;

    let exit = match config.preview_view.as_deref() {
        Some(name) => preview(&deps.orchestrator, name).await?,
        None => run_sessions(&deps.orchestrator).await?,
    };

    info!(?exit, reloads = deps.reloader.reloads(), "screenflow stopped");
    Ok(exit)
}
