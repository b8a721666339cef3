//! Error types for readiness probing

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while probing or waiting for readiness
#[derive(Error, Debug)]
pub enum HealthError {
    /// A single probe attempt timed out
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// TCP connection failed
    #[error("tcp connection failed: {0}")]
    Tcp(#[from] std::io::Error),

    /// HTTP request failed (connection refused, reset, malformed response)
    #[error("http request failed: {0}")]
    Http(#[from] hyper::Error),

    /// The probe URL did not parse
    #[error("invalid probe uri: {0}")]
    Uri(#[from] hyper::http::uri::InvalidUri),

    /// The probe request could not be built
    #[error("failed to build probe request: {0}")]
    Request(#[from] hyper::http::Error),

    /// The target answered, but with a status the predicate rejects
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// The overall wait deadline elapsed; carries the last probe failure
    #[error("target not ready after {waited:?}; last error: {last}")]
    DeadlineExceeded {
        waited: Duration,
        last: Box<HealthError>,
    },
}
