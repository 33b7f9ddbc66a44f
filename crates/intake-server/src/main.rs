//! intake-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the relay
//! client, and serves the submit proxy over HTTP. A missing or empty
//! `relay_url` aborts startup — a misconfigured relay is a deployment
//! problem, not something to discover one submission at a time.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use intake_relay::{RelayClient, RelayConfig};
use intake_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "IEDC Execom intake server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration: config.toml overridden by INTAKE_* env vars.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("INTAKE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings.try_deserialize().context(
    "failed to deserialise ServerConfig; relay_url is required \
     (config.toml or INTAKE_RELAY_URL)",
  )?;

  let relay = RelayClient::new(RelayConfig {
    endpoint: server_cfg.relay_url.clone(),
  })
  .context("relay endpoint is not configured")?;

  let state = AppState {
    relay,
    config: Arc::new(server_cfg.clone()),
  };

  let app = intake_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
