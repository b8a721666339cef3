//! TCP connection readiness probing

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::{HealthError, Probe};

/// TCP readiness probe that checks whether a connection can be established
///
/// The connection is dropped immediately after establishment; nothing is
/// written or read. Useful when the target speaks something other than HTTP
/// or when only "is the socket open" matters.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    /// Connection timeout per attempt
    timeout: Duration,
}

impl TcpProbe {
    /// Create a new TCP probe
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Get the target as `host:port`
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn check(&self) -> Result<(), HealthError> {
        let target = self.target();
        debug!("TCP probe connecting to {}", target);

        match timeout(self.timeout, TcpStream::connect(&target)).await {
            Ok(Ok(_stream)) => {
                debug!("TCP probe to {} succeeded", target);
                Ok(())
            }
            Ok(Err(io_error)) => {
                debug!("TCP probe to {} failed: {}", target, io_error);
                Err(HealthError::Tcp(io_error))
            }
            Err(_elapsed) => {
                debug!("TCP probe to {} timed out after {:?}", target, self.timeout);
                Err(HealthError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::task;

    #[tokio::test]
    async fn connects_to_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        // Accept and drop connections in the background
        let _handle = task::spawn(async move {
            while let Ok((_stream, _addr)) = listener.accept().await {}
        });

        let probe = TcpProbe::new("127.0.0.1", addr.port(), Duration::from_secs(1));
        let result = probe.check().await;
        assert!(result.is_ok(), "TCP probe should succeed: {result:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_tcp_error() {
        let probe = TcpProbe::new("127.0.0.1", 1, Duration::from_secs(1));
        let result = probe.check().await;

        match result.unwrap_err() {
            HealthError::Tcp(_) => {}
            other => panic!("Expected HealthError::Tcp, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unroutable_target_times_out() {
        let probe = TcpProbe::new("10.255.255.1", 80, Duration::from_millis(100));
        let result = probe.check().await;

        match result.unwrap_err() {
            HealthError::Timeout(d) => assert_eq!(d, Duration::from_millis(100)),
            other => panic!("Expected HealthError::Timeout, got {other:?}"),
        }
    }

    #[test]
    fn target_formatting() {
        let probe = TcpProbe::new("localhost", 5173, Duration::from_secs(5));
        assert_eq!(probe.target(), "localhost:5173");
    }
}
