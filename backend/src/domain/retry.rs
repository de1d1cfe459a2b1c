//! Bounded retry with exponential backoff for transient upstream failures.
//!
//! The policy is an immutable value shared by every in-flight request. Only
//! errors reporting [`UpstreamError::is_retryable`] are retried; once the
//! attempt budget is spent the last classified error is returned unchanged.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::UpstreamError;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(200);
const DEFAULT_MULTIPLIER: u32 = 2;
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

/// Async sleeping abstraction so retry delays can be observed in tests.
#[async_trait]
pub trait RetrySleeper: Send + Sync {
    /// Suspend the current task for `duration`.
    ///
    /// ```rust,no_run
    /// use async_trait::async_trait;
    /// use movies_gateway::domain::RetrySleeper;
    /// use std::sync::Mutex;
    /// use std::time::Duration;
    /// #[derive(Default)]
    /// struct RecordingSleeper {
    ///     delays: Mutex<Vec<Duration>>,
    /// }
    /// #[async_trait]
    /// impl RetrySleeper for RecordingSleeper {
    ///     async fn sleep(&self, duration: Duration) {
    ///         self.delays.lock().expect("delays mutex").push(duration);
    ///     }
    /// }
    /// # async fn demo() {
    /// let sleeper = RecordingSleeper::default();
    /// sleeper.sleep(Duration::from_millis(25)).await;
    /// assert_eq!(sleeper.delays.lock().expect("delays mutex").len(), 1);
    /// # }
    /// ```
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl RetrySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry budget and backoff curve for upstream calls.
///
/// ## Invariants
/// - `max_attempts >= 1` (the first call always happens).
/// - `multiplier >= 1`, so delays never shrink between attempts.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use movies_gateway::domain::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_millis(100), 2, Duration::from_secs(1));
/// assert_eq!(policy.delay_for(1), Duration::from_millis(100));
/// assert_eq!(policy.delay_for(2), Duration::from_millis(200));
/// assert_eq!(policy.delay_for(5), Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    multiplier: u32,
    max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ATTEMPTS,
            DEFAULT_BASE_DELAY,
            DEFAULT_MULTIPLIER,
            DEFAULT_MAX_DELAY,
        )
    }
}

impl RetryPolicy {
    /// Build a policy, clamping `max_attempts` and `multiplier` to at least one.
    pub fn new(max_attempts: u32, base_delay: Duration, multiplier: u32, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            multiplier: multiplier.max(1),
            max_delay,
        }
    }

    /// Total attempts allowed, including the first call.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after the 1-based `attempt` failed.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self
            .multiplier
            .saturating_pow(attempt.saturating_sub(1));
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(u64::from(factor)).min(max_ms))
    }

    /// Decide whether the failed `attempt` should be retried, and after how long.
    ///
    /// Returns `None` when the error is not retryable or the budget is spent.
    pub fn next_delay(&self, attempt: u32, error: &UpstreamError) -> Option<Duration> {
        (error.is_retryable() && attempt < self.max_attempts).then(|| self.delay_for(attempt))
    }

    /// Drive `operation` until it succeeds, fails terminally, or exhausts the budget.
    ///
    /// `upstream` names the called service in retry logs.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt, with its classification intact.
    pub async fn run<T, F, Fut>(
        &self,
        sleeper: &dyn RetrySleeper,
        upstream: &str,
        mut operation: F,
    ) -> Result<T, UpstreamError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 1;
        loop {
            let error = match operation().await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };
            let Some(delay) = self.next_delay(attempt, &error) else {
                return Err(error);
            };
            warn!(
                upstream,
                attempt,
                max_attempts = self.max_attempts,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                %error,
                "retrying upstream call"
            );
            sleeper.sleep(delay).await;
            attempt += 1;
        }
    }
}
