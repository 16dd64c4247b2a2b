//! # Ferrule
//!
//! Entry point for one-shot eligibility checks and the HTTP API server.

use clap::{Parser, Subcommand};
use ferrule_domain::{CliOverrides, Config};
use ferrule_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod output;
mod server;

#[derive(Parser)]
#[command(name = "ferrule")]
#[command(version)]
#[command(about = "Fiber and ADSL eligibility lookups for New Caledonian landlines")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one phone number and print the result
    Check {
        /// Six-digit landline number (dots and spaces accepted)
        phone: String,

        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Serve the eligibility HTTP API
    Api {
        /// HTTP port, overriding the configuration file
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: match &cli.command {
            Command::Api { port } => *port,
            Command::Check { .. } => None,
        },
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    match cli.command {
        Command::Check { phone, json } => run_check(&config, &phone, json).await,
        Command::Api { .. } => run_api(&config).await,
    }
}

async fn run_check(config: &Config, phone: &str, json: bool) -> anyhow::Result<()> {
    let services = di::Services::build(config);

    let resolution = services.check_eligibility.execute(phone).await?;
    let report = resolution.report.without_raw_html();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(phone, &report);
    }

    Ok(())
}

async fn run_api(config: &Config) -> anyhow::Result<()> {
    let services = di::Services::build(config);
    let shutdown = CancellationToken::new();

    let sweep = CacheSweepJob::new(services.purge_expired.clone())
        .with_interval(config.cache.sweep_interval_secs)
        .with_cancellation(shutdown.clone());
    JobRunner::new().with_cache_sweep(sweep).start().await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            signal_token.cancel();
        }
    });

    server::start_http_server(config, services.api_state(), shutdown).await
}
