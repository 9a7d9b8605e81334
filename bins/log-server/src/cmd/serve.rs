use tokio_util::sync::CancellationToken;

use log_store::Log;

use crate::config::{ServeArgs, ServerConfig};
use crate::error::ServerError;

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("log-server starting");

    // --- Load config ---
    let config = ServerConfig::resolve(&args)?;
    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        listen = %config.listen,
        max_records = ?config.log.max_records,
        "loaded config"
    );

    // --- CancellationToken for graceful shutdown ---
    let token = CancellationToken::new();

    let log = Log::with_config(config.log.clone());
    let api_token = token.clone();
    let listen = config.listen.clone();
    let mut api_handle =
        tokio::spawn(async move { log_api_server::run(&listen, log, api_token).await });

    // --- Wait for Ctrl+C, or for the api server to exit on its own ---
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("shutting down...");
            token.cancel();
        }
        result = &mut api_handle => {
            result??;
            tracing::warn!("api server exited without a shutdown signal");
            return Ok(());
        }
    }

    api_handle.await??;

    tracing::info!("shutdown complete");
    Ok(())
}
