//! Documentation site server binary.
//!
//! Startup order: parse CLI → load config → init logging → init metrics →
//! bind listener → serve. Any startup error is fatal.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use docsite::config::{load_config, SiteConfig};
use docsite::http::HttpServer;
use docsite::observability::{logging, metrics};

#[derive(Debug, Parser)]
#[command(name = "docsite", version, about = "Documentation site server")]
struct Cli {
    /// Path to the TOML configuration file. Built-in defaults apply when
    /// omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        locales = ?config.i18n.locales,
        default_locale = %config.i18n.default_locale,
        redirects = config.redirects.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
