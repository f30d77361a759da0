use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kamus_config::Config;
use kamus_dictionary::{DictionaryProvider, FreeDictionaryClient};
use tokio_util::sync::CancellationToken;

pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;


use self::state::AppState;

#[derive(Parser)]
#[command(name = "kamus", about = "Dictionary lookup service with favorites and history")]
struct Cli {
    /// Bind address, overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// HTTP port, overrides PORT
    #[arg(long)]
    port: Option<u16>,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut config = Config::new();
    cli.apply(&mut config);

    let provider = FreeDictionaryClient::new(
        config.dictionary.api_url.clone(),
        config.dictionary.timeout(),
    )
    .context("Failed to build dictionary client")?;

    let metadata = provider.metadata();
    tracing::info!("Using {} at {}", metadata.name, metadata.base_url);

    let state = Arc::new(AppState::new(config, Arc::new(provider)));

    let cancel = CancellationToken::new();
    tokio::spawn(server::shutdown_signal(cancel.clone()));

    server::serve(state, cancel).await
}
