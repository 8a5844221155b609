//! OS signal handling.

use tokio::sync::broadcast;

/// Resolve when Ctrl+C arrives or the shutdown channel fires (or closes).
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = shutdown.recv() => tracing::info!("Shutdown requested"),
    }
}
