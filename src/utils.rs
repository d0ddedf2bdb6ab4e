//! Utility functions.

use tracing::{info, warn};

/// Used when the OS host name cannot be read.
pub const FALLBACK_HOSTNAME: &str = "localhost";

/// Host name reported by the probes. Never empty.
pub fn resolve_hostname() -> String {
    match hostname::get().map(|name| name.into_string()) {
        Ok(Ok(name)) if !name.is_empty() => name,
        Ok(_) => {
            warn!("Host name is empty or not valid UTF-8, using {}", FALLBACK_HOSTNAME);
            FALLBACK_HOSTNAME.to_string()
        }
        Err(e) => {
            warn!("Failed to read host name: {}, using {}", e, FALLBACK_HOSTNAME);
            FALLBACK_HOSTNAME.to_string()
        }
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}
