// radvctl - control-plane client for a router advertisement daemon
// Main entry point

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;

use radvctl::api::Config;
use radvctl::client::{ControlClient, ControlConfig};

#[derive(Parser, Debug)]
#[command(name = "radvctl")]
#[command(about = "Control-plane client for a router advertisement daemon", version)]
struct Args {
    /// Daemon control address (host:port)
    #[arg(long, global = true, default_value = "127.0.0.1:8080")]
    host: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Push a new configuration into the running daemon
    Reload {
        /// Path to a JSON config file
        file: PathBuf,
    },
    /// Show per-interface daemon state
    Status {
        /// Print the raw JSON snapshot instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let client = ControlClient::new(ControlConfig {
        host: args.host,
        timeout: Duration::from_secs(args.timeout),
    })
    .context("Failed to create control client")?;

    match args.command {
        Command::Reload { file } => run_reload(&client, &file).await,
        Command::Status { json } => run_status(&client, json).await,
    }
}

/// Set up log output to stderr, controlled by RUST_LOG (default: info).
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_reload(client: &ControlClient, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read config file {}", file.display()))?;
    let config: Config = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", file.display()))?;

    client.reload(&config).await?;

    info!(file = %file.display(), "Reload accepted by daemon");
    println!("reloaded {} interface(s)", config.interfaces.len());
    Ok(())
}

async fn run_status(client: &ControlClient, json: bool) -> Result<()> {
    let status = client.status().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let width = status
        .interfaces
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(0)
        .max("INTERFACE".len());

    println!("{:<width$}  STATE", "INTERFACE", width = width);
    for entry in &status.interfaces {
        println!("{:<width$}  {}", entry.name, entry.state, width = width);
    }
    Ok(())
}
