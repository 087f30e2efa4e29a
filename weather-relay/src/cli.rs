use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use weather_core::{Config, provider_from_config};
use weather_relay::{AppState, create_router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-relay", version, about = "Weather Effects API relay")]
pub struct Cli {
    /// Address to bind, overrides `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides `server.port`.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Config file; defaults to the platform config directory.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then flags.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;

        info!(
            host = %config.server.host,
            port = config.server.port,
            timeout_secs = config.upstream.timeout_secs,
            "Configuration loaded"
        );

        let provider = provider_from_config(&config.upstream)?;
        let app = create_router(AppState::new(provider));

        let addr = config.server.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("Listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
