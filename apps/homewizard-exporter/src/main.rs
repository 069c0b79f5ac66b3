use std::sync::Arc;

use hw_api::HttpApi;
use hw_observe::logger_init;
use hw_probe::{CancellationToken, HttpProber};
use tracing::info;

mod config;
use config::ExporterConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Config + logger
    let cfg = ExporterConfig::from_env()?;
    logger_init(&cfg.logger)?;
    info!(format = %cfg.logger.format, level = %cfg.logger.level, "logger initialized");

    // 2) Prober + router
    let prober = HttpProber::new(&cfg.probe)?;
    let shutdown = CancellationToken::new();
    let app = HttpApi::new(Arc::new(prober))
        .with_timeout(cfg.probe.timeout())
        .with_shutdown(shutdown.clone())
        .router();

    // 3) Serve
    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr).await?;
    info!("starting homewizard exporter on {}", cfg.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("server closed");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM and cancels in-flight probes.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down...");
    shutdown.cancel();
}
