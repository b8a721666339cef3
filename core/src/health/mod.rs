//! Readiness probing primitives
//!
//! A probe answers one question: is the target accepting requests right now?
//! The wait loop in [`crate::wait`] calls a probe repeatedly until it passes
//! or the deadline elapses.
//!
//! ## Types
//!
//! - [`Probe`]: the trait a single readiness check implements
//! - [`HttpProbe`]: HTTP GET against the target URL
//! - [`TcpProbe`]: plain TCP connect
//! - [`Expect`]: acceptance predicate over HTTP response statuses
//! - [`HealthError`]: probe failure reasons

pub mod error;
pub mod http;
pub mod tcp;
pub mod types;

pub use error::HealthError;
pub use http::HttpProbe;
pub use tcp::TcpProbe;
pub use types::{Expect, Probe};

use std::time::Duration;

/// The kind of readiness check to run, as selected on the command line
#[derive(Debug, Clone)]
pub enum CheckKind {
    /// HTTP GET against a URL, accepted per an [`Expect`] predicate
    Http { url: String, expect: Expect },
    /// Plain TCP connect to host:port
    Tcp { host: String, port: u16 },
}

impl CheckKind {
    /// Human-readable target, suitable for progress output
    pub fn target(&self) -> String {
        match self {
            CheckKind::Http { url, .. } => url.clone(),
            CheckKind::Tcp { host, port } => format!("{}:{}", host, port),
        }
    }
}

/// Build a probe for the given check kind with a per-attempt timeout
pub fn create_probe(kind: CheckKind, timeout: Duration) -> Box<dyn Probe + Send + Sync> {
    match kind {
        CheckKind::Http { url, expect } => Box::new(HttpProbe::new(url, expect, timeout)),
        CheckKind::Tcp { host, port } => Box::new(TcpProbe::new(host, port, timeout)),
    }
}
