use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::SourceError;

/// Bounded-retry policy for outbound calls: up to `max_attempts` tries
/// with exponential backoff between them. Not tied to any one endpoint;
/// the preload scheduler runs its CDN probes through this, and any other
/// outbound operation can too.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Backoff before the retry that follows `attempt` (1-based):
    /// base_delay, 2x, 4x, ...
    fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt - 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// Invoke `op` until it succeeds, fails permanently, or the policy's
/// attempts are exhausted. Permanent failures (auth, not-found) are
/// returned immediately; exhaustion returns the last error.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let max = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_permanent() => {
                debug!("attempt {} failed permanently: {}", attempt, err);
                return Err(err);
            }
            Err(err) if attempt >= max => {
                warn!("giving up after {} attempts: {}", attempt, err);
                return Err(err);
            }
            Err(err) => {
                let delay = policy.delay_after(attempt);
                debug!(
                    "attempt {}/{} failed: {}; retrying in {:?}",
                    attempt, max, err, delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
