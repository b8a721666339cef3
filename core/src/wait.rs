//! Deadline-bounded readiness waiting
//!
//! A bounded retry loop: probe, and on failure sleep a fixed interval and try
//! again, until the probe passes or the deadline elapses. No backoff; the
//! contract is only "succeed before the deadline or fail after it".

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::health::{HealthError, Probe};

/// Total wait budget before giving up (300,000 ms)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300_000);
/// Delay between probe attempts
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

/// Repeatedly run `probe` until it passes or `timeout` elapses
///
/// Returns `Ok(())` as soon as one probe attempt succeeds. Once the deadline
/// passes, returns [`HealthError::DeadlineExceeded`] carrying the most recent
/// probe failure so callers can report the underlying reason.
pub async fn wait_for_ready(
    probe: &(dyn Probe + Send + Sync),
    timeout: Duration,
    interval: Duration,
) -> Result<(), HealthError> {
    let started = Instant::now();
    let deadline = started + timeout;
    let mut attempt: u64 = 0;

    loop {
        attempt += 1;
        match probe.check().await {
            Ok(()) => {
                debug!("target ready after {} attempt(s)", attempt);
                return Ok(());
            }
            Err(err) => {
                if Instant::now() >= deadline {
                    return Err(HealthError::DeadlineExceeded {
                        waited: started.elapsed(),
                        last: Box::new(err),
                    });
                }
                debug!("attempt {} failed: {}; retrying in {:?}", attempt, err, interval);
                sleep(interval).await;
            }
        }
    }
}
