//! Mazzura terminal client.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a local backend on http://localhost:8000
//! mazzura
//!
//! # Point at another backend and keep a log
//! mazzura --backend-url https://api.mazzura.app --log-file mazzura.log
//! ```
//!
//! # Environment
//!
//! - `MAZZURA_BACKEND_URL` - backend base URL when `--backend-url` is absent
//! - `MAZZURA_LOG_FILE` - log destination when `--log-file` is absent
//! - `RUST_LOG` - log filter (default `mazzura_tui=info,mazzura_client=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use mazzura_client::{ApiClient, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mazzura")]
#[command(author, version, about = "Mazzura fashion profile and wardrobe client")]
struct Cli {
    /// Backend base URL (overrides `MAZZURA_BACKEND_URL`)
    #[arg(long)]
    backend_url: Option<String>,

    /// Write logs to this file; logging is off without it
    #[arg(long, env = "MAZZURA_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[allow(clippy::print_stderr)]
fn main() {
    // Load .env before clap reads env-backed arguments
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_tracing(path) {
            eprintln!("Cannot open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    if let Err(e) = run(cli) {
        tracing::error!("Client failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.backend_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = ApiClient::new(&config)?;
    tracing::info!(base_url = client.base_url(), "Client configured");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    mazzura_tui::app::run(client, runtime.handle().clone())?;
    Ok(())
}

/// The terminal owns stdout, so logs only go to a file.
fn init_tracing(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mazzura_tui=info,mazzura_client=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
