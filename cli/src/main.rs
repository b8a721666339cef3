//! devready binary
//!
//! Waits for a local dev server to answer before handing control back to the
//! caller, for use ahead of test runs and tooling that needs the server up.

#![allow(unused_crate_dependencies)]

use clap::Parser;
use devready::{Result, WaitOptions};
use devready_core::config::{read_env_file, DEFAULT_ENV_FILE, PORT_ENV_VAR};
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

#[derive(Parser)]
#[command(name = "devready")]
#[command(about = "Wait until a local dev server responds, or time out")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to probe, bypassing the environment and env file lookup
    #[arg(long)]
    port: Option<String>,

    /// Env file consulted for a VITE_PORT=... line
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Host to probe
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Request path for the HTTP probe
    #[arg(long, default_value = "/")]
    url_path: String,

    /// Total time budget in seconds before giving up
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,

    /// Delay between probe attempts in milliseconds
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Per-attempt probe timeout in seconds
    #[arg(long, default_value_t = 5)]
    probe_timeout_secs: u64,

    /// Probe with a plain TCP connect instead of an HTTP GET
    #[arg(long)]
    tcp: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    devready_core::utils::init_tracing("info")?;

    let cli = Cli::parse();

    // Ambient state is gathered here, once; everything below takes explicit inputs.
    let env_port = std::env::var(PORT_ENV_VAR).ok();
    let env_file = read_env_file(&cli.env_file);

    let opts = WaitOptions {
        port: cli.port,
        env_port,
        env_file,
        host: cli.host,
        url_path: cli.url_path,
        timeout: Duration::from_secs(cli.timeout_secs),
        interval: Duration::from_millis(cli.interval_ms),
        probe_timeout: Duration::from_secs(cli.probe_timeout_secs),
        tcp: cli.tcp,
    };

    if let Err(e) = devready::run(opts).await {
        error!("dev server did not become ready: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
