//! Marquee CLI - Demo data seeding and gateway status tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed demo users and movies against the gateway
//! marquee-cli seed
//!
//! # Show per-service deployment status
//! marquee-cli status
//!
//! # Point at a non-default gateway
//! marquee-cli --api-base-url http://localhost:9090 seed
//! ```
//!
//! The gateway base URL comes from `--api-base-url` or the
//! `MARQUEE_API_BASE_URL` environment variable (a `.env` file is honored).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "marquee-cli")]
#[command(author, version, about = "Marquee CLI tools")]
struct Cli {
    /// Base URL of the remote booking API gateway
    #[arg(long, global = true)]
    api_base_url: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo users and movies (skipped when both already exist)
    Seed,
    /// Show per-service deployment status
    Status,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = resolve_base_url(cli.api_base_url)?;

    match cli.command {
        Commands::Seed => commands::seed::run(&base_url).await?,
        Commands::Status => commands::status::run(&base_url).await?,
    }
    Ok(())
}

/// Resolve the gateway base URL from the flag or the environment.
fn resolve_base_url(flag: Option<Url>) -> Result<Url, Box<dyn std::error::Error>> {
    if let Some(url) = flag {
        return Ok(url);
    }

    dotenvy::dotenv().ok();
    let raw = std::env::var("MARQUEE_API_BASE_URL")
        .map_err(|_| "MARQUEE_API_BASE_URL not set and --api-base-url not given")?;
    Ok(Url::parse(raw.trim_end_matches('/'))?)
}
