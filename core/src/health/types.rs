//! Core types and traits for readiness probing

use super::HealthError;
use async_trait::async_trait;

/// Acceptance predicate over HTTP response statuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    /// Accept any response the server produced itself: statuses in [200, 500).
    ///
    /// Client errors like 404 count as ready on purpose; the point is to
    /// detect that *some* HTTP response is being served, not that a specific
    /// route exists. Only server errors (>= 500) are rejected.
    Serving,
    /// Accept any 2xx status code (200-299)
    Any2xx,
    /// Require one specific status code
    Status(u16),
}

impl Expect {
    /// Check whether a status code satisfies this expectation
    pub fn matches_status(&self, status: u16) -> bool {
        match self {
            Expect::Serving => (200..500).contains(&status),
            Expect::Any2xx => (200..=299).contains(&status),
            Expect::Status(expected) => status == *expected,
        }
    }
}

impl Default for Expect {
    fn default() -> Self {
        Expect::Serving
    }
}

/// Trait for readiness check implementations
///
/// Implemented by the concrete probe types (HTTP, TCP) to give the wait loop
/// a uniform interface.
#[async_trait]
pub trait Probe {
    /// Execute one readiness check
    ///
    /// Returns `Ok(())` if the target is ready, or an error describing why
    /// this attempt failed. Implementations respect their configured timeout.
    async fn check(&self) -> Result<(), HealthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serving_accepts_everything_below_500() {
        let serving = Expect::Serving;
        assert!(serving.matches_status(200));
        assert!(serving.matches_status(204));
        assert!(serving.matches_status(302));
        assert!(serving.matches_status(404));
        assert!(serving.matches_status(499));

        assert!(!serving.matches_status(199));
        assert!(!serving.matches_status(500));
        assert!(!serving.matches_status(503));
    }

    #[test]
    fn any2xx_bounds() {
        let any2xx = Expect::Any2xx;
        assert!(any2xx.matches_status(200));
        assert!(any2xx.matches_status(299));
        assert!(!any2xx.matches_status(199));
        assert!(!any2xx.matches_status(300));
        assert!(!any2xx.matches_status(404));
    }

    #[test]
    fn exact_status() {
        let status200 = Expect::Status(200);
        assert!(status200.matches_status(200));
        assert!(!status200.matches_status(201));
        assert!(!status200.matches_status(404));
    }

    #[test]
    fn default_is_serving() {
        assert_eq!(Expect::default(), Expect::Serving);
    }
}
