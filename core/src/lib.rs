//! Core functionality for the devready readiness poller
//!
//! This crate contains the pieces the CLI wires together: port resolution,
//! readiness probes, and the deadline-bounded wait loop. Everything here takes
//! explicit inputs; ambient state (process environment, filesystem) is gathered
//! by the binary entry point.

pub mod config;
pub mod error;
pub mod health;
pub mod wait;

pub use config::{resolve_port, DEFAULT_ENV_FILE, DEFAULT_PORT, PORT_ENV_VAR};
pub use error::{CoreError, Result};
pub use health::{create_probe, CheckKind, Expect, HealthError, HttpProbe, Probe, TcpProbe};
pub use wait::{wait_for_ready, DEFAULT_INTERVAL, DEFAULT_TIMEOUT};

/// Core utilities and helper functions
pub mod utils {
    use tracing::debug;

    /// Initialize tracing for the application
    ///
    /// Diagnostics go to stderr so they never mix with the poller's stdout
    /// progress lines. `RUST_LOG` overrides the given default level.
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::CoreError::InitializationError(e.to_string()))?;

        debug!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
