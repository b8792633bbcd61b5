//! Alien Colony - an in-memory alien family tree over HTTP
//!
//! Usage:
//!   alien-colony                      - Serve with defaults
//!   alien-colony serve --port 9090    - Serve on another port
//!   alien-colony --config colony.yaml - Serve with a config file
//!   alien-colony demo                 - Run a scripted colony in-process

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colony_app::commands::{DemoCommand, ServeCommand};
use shared::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alien-colony")]
#[command(about = "Alien Colony - manage a genealogical tree of aliens over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON or YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),
    /// Run a scripted colony and log each step
    Demo(DemoCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    // Initialize logging; RUST_LOG wins over the config file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    match cli.command {
        Some(Commands::Serve(cmd)) => cmd.run(config).await,
        Some(Commands::Demo(cmd)) => cmd.run(),
        None => ServeCommand::default().run(config).await,
    }
}
