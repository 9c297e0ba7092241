use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexis_config::Config;
use lexis_server::logging::init_tracing;
use lexis_server::state::AppState;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// English ⇄ Igala translation and back-translation quality server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Without it, configuration comes from `LEXIS_*` variables.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<IpAddr>,

    #[arg(long, short)]
    port: Option<u16>,

    /// Extra dictionary file (.json or .tsv), repeatable
    #[arg(long = "dictionary", short = 'd')]
    dictionaries: Vec<String>,

    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config.dictionary.additional_paths.extend(self.dictionaries);
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Cli::parse().into_config()?;
    init_tracing(&config.logging)?;

    let state = AppState::new(config);

    // Shutdown on Ctrl+C
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown requested");
                    shutdown.cancel();
                }
                Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
            }
        }
    });

    lexis_server::serve(state, shutdown).await
}
