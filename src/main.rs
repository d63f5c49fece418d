use anyhow::{Context, Result};
use clap::Parser;
use reqwest::redirect::Policy;
use std::path::PathBuf;
use tokio::sync::mpsc;

use weft::api::ApiClient;
use weft::app::{App, AppEvent};
use weft::config::Config;

/// Get the config directory path (~/.config/weft/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("weft"))
}

/// Redirect policy with limited hops and loop detection.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(url = %url, hops = attempt.previous().len(), "Following redirect");
        attempt.follow()
    })
}

#[derive(Parser, Debug)]
#[command(name = "weft", about = "Terminal client for a feed-aggregation server")]
struct Args {
    /// Server base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to the config file (default: ~/.config/weft/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(server) = args.server {
        config.server_url = server;
    }

    let http = reqwest::Client::builder()
        .redirect(create_redirect_policy())
        .build()
        .context("Failed to build HTTP client")?;
    let api = ApiClient::new(http, &config.server_url, config.request_timeout_secs)
        .with_context(|| format!("Invalid server URL: {}", config.server_url))?;

    let mut app = App::new(api, &config);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    weft::ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
