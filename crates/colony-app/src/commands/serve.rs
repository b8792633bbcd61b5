//! alien-colony serve command

use anyhow::Context;
use clap::Args;
use colony_adapter::{router, InMemoryColonyRepository};
use colony_usecase::ColonyService;
use shared::ServerConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    /// Interface to bind (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: ServerConfig) -> ServerConfig {
        let config = match &self.host {
            Some(host) => config.with_host(host.clone()),
            None => config,
        };
        match self.port {
            Some(port) => config.with_port(port),
            None => config,
        }
    }

    pub async fn run(&self, config: ServerConfig) -> anyhow::Result<()> {
        let config = self.apply(config);
        let addr = config.socket_addr()?;

        // Adapters (could be swapped for a persistent store)
        let repository = InMemoryColonyRepository::new();
        let service = ColonyService::new(repository);
        let app = router(service);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Alien colony v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
