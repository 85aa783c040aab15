//! Sentinela server binary.

use std::sync::Arc;

use clap::Parser;
use log::{error, info, warn};
use sentinela::{create_router, AppState, Config};

#[derive(Parser)]
#[command(name = "sentinela")]
#[command(version)]
#[command(about = "Text analysis and sentiment API", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Sentiment inference endpoint URL (overrides the default model)
    #[arg(long)]
    endpoint: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mut config = Config::default();
    config.server.host = cli.host;
    config.server.port = cli.port;
    if let Some(endpoint) = cli.endpoint {
        config.sentiment.endpoint = endpoint;
    }
    config.sentiment.api_key = std::env::var("HUGGINGFACE_API_KEY").ok();
    if config.sentiment.api_key.is_none() {
        warn!("HUGGINGFACE_API_KEY is not set; remote classification will likely fall back to the local heuristic");
    }

    let state = match AppState::new(&config) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            error!("failed to initialize: {err}");
            std::process::exit(1);
        }
    };

    let addr = config.server.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!("API listening on http://{addr}");
    if let Err(err) = axum::serve(listener, create_router(state)).await {
        error!("server error: {err}");
        std::process::exit(1);
    }
}
