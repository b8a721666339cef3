//! Library entry point for the devready CLI
//!
//! The binary gathers ambient inputs (process environment, env file contents)
//! once and hands them to [`run`]; integration tests drive the same path
//! in-process instead of spawning the binary.

pub mod error;

pub use error::{CliError, Result};

use std::time::Duration;

use devready_core::health::{create_probe, CheckKind};
use devready_core::{resolve_port, wait_for_ready, Expect, DEFAULT_INTERVAL, DEFAULT_TIMEOUT};
use tracing::debug;

/// Everything [`run`] needs, gathered once by the caller
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Explicit port, bypassing resolution entirely
    pub port: Option<String>,
    /// Value of the port environment variable, if it was set
    pub env_port: Option<String>,
    /// Contents of the env file, if it could be read
    pub env_file: Option<String>,
    /// Host to probe
    pub host: String,
    /// Request path for the HTTP probe
    pub url_path: String,
    /// Total time budget before giving up
    pub timeout: Duration,
    /// Delay between probe attempts
    pub interval: Duration,
    /// Per-attempt probe timeout
    pub probe_timeout: Duration,
    /// Probe with a plain TCP connect instead of an HTTP GET
    pub tcp: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            port: None,
            env_port: None,
            env_file: None,
            host: "127.0.0.1".to_string(),
            url_path: "/".to_string(),
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
            probe_timeout: Duration::from_secs(5),
            tcp: false,
        }
    }
}

/// Resolve the target port and block until the server answers
///
/// Prints a progress line before polling begins and a confirmation line on
/// success. Returns the resolved port so callers can report it.
pub async fn run(opts: WaitOptions) -> Result<String> {
    let port = match opts.port {
        Some(port) => port,
        None => resolve_port(opts.env_port.as_deref(), opts.env_file.as_deref()),
    };
    debug!("resolved port: {}", port);

    let kind = if opts.tcp {
        let port_num: u16 = port.parse().map_err(|_| {
            CliError::InvalidArgument(format!("port '{}' is not a valid TCP port", port))
        })?;
        CheckKind::Tcp {
            host: opts.host,
            port: port_num,
        }
    } else {
        CheckKind::Http {
            url: format!("http://{}:{}{}", opts.host, port, opts.url_path),
            expect: Expect::Serving,
        }
    };

    println!("Waiting for dev server at {} ...", kind.target());

    let probe = create_probe(kind, opts.probe_timeout);
    wait_for_ready(probe.as_ref(), opts.timeout, opts.interval).await?;

    println!("Dev server is ready on port {}", port);
    Ok(port)
}
