/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Running terminal UI connected to the task service
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod config;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdeck_client::TaskClient;

use crate::config::AppConfig;
use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Terminal client for a task tracking service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = load_config(&args)?;

    let log_buffer: LogBufferHandle = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&config.log_level, log_buffer.clone())?;

    info!(base_url = %config.base_url, "starting taskdeck");

    let client = TaskClient::with_base_url(&config.base_url).context("create task client")?;

    tui::run_tui(client, log_buffer).await
}

/// Merge the config file (explicit path, or the default path if it exists)
/// with CLI overrides. Flags win over file values.
fn load_config(args: &Cli) -> Result<AppConfig> {
    let mut config = match &args.config_path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")?
        }
        None => match AppConfig::default_path() {
            Some(path) if path.exists() => {
                let path_str = path.to_str().context("config path must be valid utf-8")?;
                AppConfig::from_file(path_str).context("load config")?
            }
            _ => AppConfig::default(),
        },
    };

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }
    Ok(config)
}

/// Route tracing output into the TUI log buffer so log lines end up in the
/// Logs tab instead of the alternate screen.
fn init_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
