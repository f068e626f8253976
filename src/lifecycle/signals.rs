//! OS signal handling.
//!
//! Translates SIGINT (and SIGTERM on unix) into the shutdown path using
//! Tokio's async-safe signal handling. Registration failures are logged and
//! that signal source is simply never triggered.

use tokio::signal;

/// Resolve when an interrupt-class signal arrives.
pub async fn interrupt() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
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
        _ = ctrl_c => {
            tracing::info!("Received interrupt, initiating shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        },
    }
}
