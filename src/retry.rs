use crate::error::FetchError;
use std::time::Duration;

/// Retry policy for transient failures: bounded attempts with exponential
/// backoff. Whether an error is worth retrying is decided by
/// [`FetchError::is_retryable`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    /// 3 attempts, backing off 1s then 2s between them.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Policy without sleeps, for tests and latency-sensitive callers.
    pub fn no_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
        }
    }

    /// Backoff before attempt `n + 1`, doubling each time (1s, 2s, 4s, ...).
    fn backoff_after(&self, attempt: u32) -> Duration {
        self.initial_backoff * 2u32.saturating_pow(attempt.saturating_sub(1))
    }

    /// Run `op` until it succeeds, fails fatally, or attempts run out.
    /// The last error is returned unchanged after exhaustion.
    pub fn run<T, F>(&self, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Result<T, FetchError>,
    {
        let mut attempt = 1u32;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    let wait = self.backoff_after(attempt);
                    log::debug!(
                        "attempt {attempt}/{} failed ({e}); retrying in {wait:?}",
                        self.max_attempts
                    );
                    if !wait.is_zero() {
                        std::thread::sleep(wait);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
