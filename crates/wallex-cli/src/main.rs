/*
[INPUT]:  CLI arguments, optional YAML configuration file, WALLEX_* environment
[OUTPUT]: Pretty JSON of one read-only API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod commands;
mod config;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wallex_adapter::WallexClient;

use crate::commands::Command;
use crate::config::FlagOverrides;

#[derive(Parser, Debug)]
#[command(name = "wallex", version, about = "Read-only Wallex exchange queries")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[arg(long = "api-key", value_name = "KEY", global = true)]
    api_key: Option<String>,
    #[arg(long = "timeout-ms", value_name = "MILLIS", global = true)]
    timeout_ms: Option<u64>,
    #[arg(long = "detailed-errors", global = true)]
    detailed_errors: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let flags = FlagOverrides {
        api_key: args.api_key.clone(),
        timeout_ms: args.timeout_ms,
        detailed_errors: args.detailed_errors,
    };
    let client_config = config::resolve(args.config_path.as_deref(), &flags)?;
    debug!(config = ?client_config, "client configuration resolved");

    let client = WallexClient::with_config(client_config).context("create wallex client")?;
    let value = commands::execute(&client, args.command).await?;

    let rendered = serde_json::to_string_pretty(&value).context("render json")?;
    println!("{rendered}");
    info!("done");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
