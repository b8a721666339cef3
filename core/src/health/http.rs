//! HTTP request readiness probing

use async_trait::async_trait;
use hyper::{Body, Client, Method, Request, Uri};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use super::{Expect, HealthError, Probe};

/// HTTP readiness probe that makes a GET request and validates the status
///
/// # Example
///
/// ```rust
/// use devready_core::health::{Expect, HttpProbe, Probe};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let probe = HttpProbe::new(
///     "http://127.0.0.1:5173/".to_string(),
///     Expect::Serving,
///     Duration::from_secs(5),
/// );
///
/// match probe.check().await {
///     Ok(()) => println!("dev server is up"),
///     Err(e) => println!("not ready: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProbe {
    /// URL to request
    url: String,
    /// Acceptance predicate for the response status
    expect: Expect,
    /// Per-attempt request timeout
    timeout: Duration,
}

impl HttpProbe {
    /// Create a new HTTP probe
    pub fn new(url: String, expect: Expect, timeout: Duration) -> Self {
        Self {
            url,
            expect,
            timeout,
        }
    }

    /// Get the target URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self) -> Result<(), HealthError> {
        debug!("HTTP probe requesting {}", self.url);

        let client = Client::new();
        let uri: Uri = self.url.parse()?;
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())?;

        let response = match timeout(self.timeout, client.request(req)).await {
            Ok(Ok(response)) => response,
            Ok(Err(hyper_error)) => {
                debug!("HTTP probe to {} failed: {}", self.url, hyper_error);
                return Err(HealthError::Http(hyper_error));
            }
            Err(_elapsed) => {
                debug!(
                    "HTTP probe to {} timed out after {:?}",
                    self.url, self.timeout
                );
                return Err(HealthError::Timeout(self.timeout));
            }
        };

        let status = response.status();
        debug!("HTTP probe to {} returned status {}", self.url, status);

        if !self.expect.matches_status(status.as_u16()) {
            return Err(HealthError::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}
